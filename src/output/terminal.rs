//! Plain-text rendering of a [`SurveyReport`].
//!
//! Sections are written in a fixed order into one `String`; nothing in the
//! report depends on hash order or the clock, so the same input always
//! renders byte-identical text.

use crate::analysis::{
    ChannelSection, ComparisonSection, ConversionSection, DifferentiationSection,
    InformalDebtSection, PricingSection, RecurringPaymentsSection, SurveyReport,
};
use crate::config::{DecisionThresholds, ProductNames, SurveyConfig};
use crate::core::metrics::percentage;
use crate::decision::{
    ConversionVerdict, DifferentiationVerdict, HeadToHead, ProductOption, Recommendation,
    ScopeNote,
};
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::metrics::{Denominator, FrequencyTable, ScaleStats};
use std::fmt::Write;

const WIDTH: usize = 80;
const NOT_AVAILABLE: &str = "N/A";

/// `count/denominator` as a one-decimal percentage, or N/A for an empty base
pub fn format_pct(count: usize, denominator: usize) -> String {
    if denominator == 0 {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{:.1}%", percentage(count, denominator))
    }
}

fn format_mean(stats: &ScaleStats) -> String {
    match stats.mean_if_any() {
        Some(mean) => format!("{mean:.2}/10"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Combined Pain A mean, or N/A when neither Pain A question has an answer
fn format_pain_a(section: &InformalDebtSection) -> String {
    if section.discomfort.is_empty() && section.stress.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{:.2}/10", section.pain_mean())
    }
}

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate:.1}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn format_median(stats: &ScaleStats) -> String {
    if stats.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{:.1}/10", stats.median)
    }
}

fn product_label(option: ProductOption, products: &ProductNames) -> String {
    match option {
        ProductOption::A => format!("{option} ({})", products.option_a),
        ProductOption::B => format!("{option} ({})", products.option_b),
    }
}

pub fn format_report(
    report: &SurveyReport,
    config: &SurveyConfig,
    formatting: FormattingConfig,
) -> String {
    let mut output = String::new();
    let formatter = ColoredFormatter::new(formatting);
    let thresholds = &config.thresholds;

    let rule = "=".repeat(WIDTH);
    writeln!(output, "{}", formatter.header(&rule)).unwrap();
    writeln!(output, "{}", formatter.header("SURVEY RESULTS ANALYSIS")).unwrap();
    writeln!(output, "{}", formatter.header(&rule)).unwrap();
    writeln!(output, "Total responses: {}", report.respondents).unwrap();

    format_recurring_section(&mut output, &report.recurring, thresholds, &formatter);
    format_informal_section(&mut output, &report.informal, thresholds, &formatter);
    format_differentiation_section(
        &mut output,
        &report.differentiation,
        report.differentiation_verdict,
        thresholds,
        &formatter,
    );
    format_comparison_section(&mut output, &report.comparison, &config.products, &formatter);
    format_channel_section(
        &mut output,
        &report.channels,
        &config.answers.highlighted_channel,
        thresholds.top_channels,
        &formatter,
    );
    format_pricing_section(&mut output, &report.pricing, &formatter);
    format_conversion_section(
        &mut output,
        &report.conversion,
        report.conversion_verdict,
        thresholds,
        &formatter,
    );
    format_summary(&mut output, report, config, &formatter);
    format_recommendation(&mut output, report, config, &formatter);

    writeln!(output).unwrap();
    writeln!(output, "{}", formatter.header(&rule)).unwrap();
    output
}

fn section_header(output: &mut String, icon: &str, title: &str, formatter: &ColoredFormatter) {
    writeln!(output).unwrap();
    writeln!(output, "{}", "=".repeat(WIDTH)).unwrap();
    writeln!(output, "{} {}", formatter.icon(icon), formatter.header(title)).unwrap();
    writeln!(output, "{}", "-".repeat(WIDTH)).unwrap();
}

/// One line per bucket, `limit` buckets at most. Percentages over all
/// respondents are labelled as such.
fn format_table(output: &mut String, table: &FrequencyTable, limit: Option<usize>) {
    let basis = match table.basis {
        Denominator::Respondents => format!(" of {}", table.basis),
        Denominator::ValidResponses => String::new(),
    };
    if table.is_empty() {
        writeln!(output, "  (no answers)").unwrap();
        return;
    }
    let buckets = match limit {
        Some(n) => table.top(n),
        None => table.buckets.as_slice(),
    };
    for bucket in buckets {
        writeln!(
            output,
            "  {}: {} ({}{})",
            bucket.label,
            bucket.count,
            format_pct(bucket.count, table.denominator),
            basis
        )
        .unwrap();
    }
}

fn format_scale_lines(
    output: &mut String,
    name: &str,
    stats: &ScaleStats,
    thresholds: &DecisionThresholds,
) {
    writeln!(output, "{name} mean: {}", format_mean(stats)).unwrap();
    writeln!(output, "{name} median: {}", format_median(stats)).unwrap();
    for (threshold, label) in [
        (thresholds.high_pain, "high pain"),
        (thresholds.moderate_pain, "moderate pain"),
    ] {
        let count = stats.count_at_least(threshold);
        writeln!(
            output,
            "{name} >={threshold} ({label}): {count} ({})",
            format_pct(count, stats.valid())
        )
        .unwrap();
    }
    if stats.rejected > 0 {
        writeln!(
            output,
            "{name} answers ignored (not a 1-10 score): {}",
            stats.rejected
        )
        .unwrap();
    }
}

fn format_recurring_section(
    output: &mut String,
    section: &RecurringPaymentsSection,
    thresholds: &DecisionThresholds,
    formatter: &ColoredFormatter,
) {
    section_header(output, "📊", "PAIN B METRICS (RECURRING PAYMENTS)", formatter);
    format_scale_lines(output, "Pain B", &section.stress, thresholds);

    let valid = section.missed_payments.valid();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Forgot a payment (last 6 months): {}/{} ({})",
        section.forgot(),
        valid,
        format_pct(section.forgot(), valid)
    )
    .unwrap();
    writeln!(
        output,
        "Never forgot: {}/{} ({})",
        section.never_forgot(),
        valid,
        format_pct(section.never_forgot(), valid)
    )
    .unwrap();
}

fn format_informal_section(
    output: &mut String,
    section: &InformalDebtSection,
    thresholds: &DecisionThresholds,
    formatter: &ColoredFormatter,
) {
    section_header(output, "📊", "PAIN A METRICS (INFORMAL DEBTS)", formatter);
    format_scale_lines(output, "Pain A discomfort", &section.discomfort, thresholds);
    format_scale_lines(output, "Pain A stress", &section.stress, thresholds);

    writeln!(output, "Pain A mean: {}", format_pain_a(section)).unwrap();
    writeln!(
        output,
        "Pain A >={} (high pain): {} measurements",
        thresholds.high_pain,
        section.high_pain_measurements(thresholds.high_pain)
    )
    .unwrap();

    writeln!(output).unwrap();
    writeln!(output, "Experience with informal loans:").unwrap();
    format_table(output, &section.loan_experience, None);
}

fn format_differentiation_section(
    output: &mut String,
    section: &DifferentiationSection,
    verdict: Option<DifferentiationVerdict>,
    thresholds: &DecisionThresholds,
    formatter: &ColoredFormatter,
) {
    section_header(output, "🔥", "CRITICAL: MONEY VS OBJECTS", formatter);
    writeln!(
        output,
        "{} {}",
        formatter.icon("⚠️"),
        formatter.warning("This split decides which Option A MVP to build")
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Valid answers: {}", section.valid()).unwrap();
    format_table(output, &section.table, None);

    writeln!(output).unwrap();
    writeln!(output, "{} Split:", formatter.icon("🎯")).unwrap();
    let valid = section.valid();
    for (label, count) in [
        ("Money", section.money),
        ("Objects", section.objects),
        ("Both", section.both),
        ("Avoids conflict", section.avoids_conflict),
    ] {
        writeln!(output, "   {label}: {}", format_pct(count, valid)).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "{} Verdict:", formatter.icon("📊")).unwrap();
    let line = match verdict {
        Some(DifferentiationVerdict::MoneyOnly { pct }) => format!(
            "{} {}",
            formatter.icon("✅"),
            formatter.success(&format!(
                "Build the MVP for money only ({pct:.1}% >= {:.0}%)",
                thresholds.concentration_pct
            ))
        ),
        Some(DifferentiationVerdict::ObjectsOnly { pct }) => format!(
            "{} {}",
            formatter.icon("✅"),
            formatter.success(&format!(
                "Build the MVP for objects only ({pct:.1}% >= {:.0}%)",
                thresholds.concentration_pct
            ))
        ),
        Some(DifferentiationVerdict::Distributed { both_pct }) => format!(
            "{} {}",
            formatter.icon("⚠️"),
            formatter.warning(&format!(
                "Distributed pain ({both_pct:.1}% both): hybrid MVP or test each separately"
            ))
        ),
        Some(DifferentiationVerdict::Mixed) => format!(
            "{} {}",
            formatter.icon("ℹ️"),
            formatter.info(&format!(
                "Mixed pain: money {}, objects {}, both {}",
                format_pct(section.money, valid),
                format_pct(section.objects, valid),
                format_pct(section.both, valid)
            ))
        ),
        None => format!("{NOT_AVAILABLE} (no answers)"),
    };
    writeln!(output, "   {line}").unwrap();
}

fn format_comparison_section(
    output: &mut String,
    section: &ComparisonSection,
    products: &ProductNames,
    formatter: &ColoredFormatter,
) {
    section_header(output, "🎯", "DIRECT COMPARISON A VS B", formatter);
    let valid = section.valid();
    writeln!(output, "Valid answers: {valid}").unwrap();
    writeln!(output).unwrap();
    for (label, count) in [
        (product_label(ProductOption::B, products), section.prefer_b),
        (product_label(ProductOption::A, products), section.prefer_a),
        ("Both equally".to_string(), section.both),
        ("Neither useful".to_string(), section.neither),
    ] {
        writeln!(output, "{label}: {count} ({})", format_pct(count, valid)).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "{} Winner by direct comparison:", formatter.icon("🏆")).unwrap();
    let line = match section.winner() {
        HeadToHead::Winner(option) => {
            let (winner, loser) = match option {
                ProductOption::A => (section.prefer_a, section.prefer_b),
                ProductOption::B => (section.prefer_b, section.prefer_a),
            };
            format!(
                "{} {} - {winner} vs {loser}",
                formatter.icon("✅"),
                formatter.success(&product_label(option, products))
            )
        }
        HeadToHead::Tie => format!(
            "{} Tie - {} vs {}",
            formatter.icon("⚖️"),
            section.prefer_a,
            section.prefer_b
        ),
    };
    writeln!(output, "   {line}").unwrap();

    writeln!(output).unwrap();
    writeln!(output, "Total interest (counting 'both'):").unwrap();
    writeln!(
        output,
        "   Interest in B: {} ({})",
        section.interest_b(),
        format_pct(section.interest_b(), valid)
    )
    .unwrap();
    writeln!(
        output,
        "   Interest in A: {} ({})",
        section.interest_a(),
        format_pct(section.interest_a(), valid)
    )
    .unwrap();
}

fn format_channel_section(
    output: &mut String,
    section: &ChannelSection,
    highlighted: &str,
    top: usize,
    formatter: &ColoredFormatter,
) {
    section_header(output, "📱", "PREFERRED CHANNEL", formatter);
    writeln!(output, "Total channel mentions: {}", section.mentions()).unwrap();
    writeln!(output).unwrap();
    format_table(output, &section.table, Some(top));

    writeln!(output).unwrap();
    writeln!(
        output,
        "{} {highlighted} named by {} of {} respondents ({}), {} mentions",
        formatter.icon("✅"),
        section.highlighted_respondents,
        section.table.denominator,
        format_rate(section.highlighted_pct()),
        section.highlighted
    )
    .unwrap();
}

fn format_pricing_section(output: &mut String, section: &PricingSection, formatter: &ColoredFormatter) {
    section_header(output, "💰", "WILLINGNESS TO PAY", formatter);
    writeln!(output, "WTP distribution:").unwrap();
    format_table(output, &section.table, None);

    let valid = section.valid();
    writeln!(output).unwrap();
    writeln!(
        output,
        "{} Would pay something (>$0): {} ({})",
        formatter.icon("✅"),
        section.would_pay(),
        format_pct(section.would_pay(), valid)
    )
    .unwrap();
    writeln!(
        output,
        "{} Free only: {} ({})",
        formatter.icon("⚠️"),
        section.free_only,
        format_pct(section.free_only, valid)
    )
    .unwrap();
}

fn format_conversion_section(
    output: &mut String,
    section: &ConversionSection,
    verdict: Option<ConversionVerdict>,
    thresholds: &DecisionThresholds,
    formatter: &ColoredFormatter,
) {
    section_header(output, "🚀", "INTENT VS SMOKE TEST", formatter);
    let valid = section.intent.denominator;
    writeln!(output, "Intent to use:").unwrap();
    for (label, count) in [
        ("Yes, definitely", section.definitely),
        ("Maybe", section.maybe),
        ("Not interested", section.not_interested),
    ] {
        writeln!(output, "  {label}: {count} ({})", format_pct(count, valid)).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "Beta smoke test:").unwrap();
    format_table(output, &section.smoke_test, None);

    writeln!(output).unwrap();
    writeln!(output, "{} Intent to action conversion:", formatter.icon("📊")).unwrap();
    writeln!(output, "   {} said 'definitely'", section.definitely).unwrap();
    writeln!(output, "   {} left contact details for the beta", section.wants_beta).unwrap();
    writeln!(output, "   Conversion rate: {}", format_rate(section.conversion_rate())).unwrap();

    let line = match verdict {
        Some(ConversionVerdict::CourtesyBias) => format!(
            "{} {}",
            formatter.icon("⚠️"),
            formatter.warning(&format!(
                "Courtesy bias detected (conversion < {:.0}%)",
                thresholds.courtesy_bias_pct
            ))
        ),
        Some(ConversionVerdict::StrongIntent) => format!(
            "{} {}",
            formatter.icon("✅"),
            formatter.success(&format!(
                "Strong real intent (conversion >= {:.0}%)",
                thresholds.strong_intent_pct
            ))
        ),
        Some(ConversionVerdict::Moderate) => format!(
            "{} {}",
            formatter.icon("ℹ️"),
            formatter.info(&format!(
                "Moderate intent (conversion {:.0}-{:.0}%)",
                thresholds.courtesy_bias_pct, thresholds.strong_intent_pct
            ))
        ),
        None => format!("{NOT_AVAILABLE} (nobody answered 'definitely')"),
    };
    writeln!(output, "   {line}").unwrap();
}

fn format_summary(
    output: &mut String,
    report: &SurveyReport,
    config: &SurveyConfig,
    formatter: &ColoredFormatter,
) {
    section_header(output, "📋", "EXECUTIVE SUMMARY - MVP DECISION", formatter);

    writeln!(output, "1. Pain scores:").unwrap();
    writeln!(output, "   Pain B (payments): {}", format_mean(&report.recurring.stress)).unwrap();
    writeln!(output, "   Pain A (debts): {}", format_pain_a(&report.informal)).unwrap();

    let comparison = &report.comparison;
    let valid = comparison.valid();
    writeln!(output).unwrap();
    writeln!(output, "2. Direct comparison:").unwrap();
    for (label, count) in [
        ("Prefer B", comparison.prefer_b),
        ("Prefer A", comparison.prefer_a),
        ("Both", comparison.both),
    ] {
        writeln!(output, "   {label}: {count} ({})", format_pct(count, valid)).unwrap();
    }

    let differentiation = &report.differentiation;
    if differentiation.valid() > 0 {
        let valid = differentiation.valid();
        writeln!(output).unwrap();
        writeln!(output, "3. Money vs objects:").unwrap();
        writeln!(output, "   Money: {}", format_pct(differentiation.money, valid)).unwrap();
        writeln!(output, "   Objects: {}", format_pct(differentiation.objects, valid)).unwrap();
        writeln!(output, "   Both: {}", format_pct(differentiation.both, valid)).unwrap();
    }

    let channels = &report.channels;
    writeln!(output).unwrap();
    writeln!(output, "4. Channel:").unwrap();
    writeln!(
        output,
        "   {} preferred: {}",
        config.answers.highlighted_channel,
        format_rate(channels.highlighted_pct())
    )
    .unwrap();

    let pricing = &report.pricing;
    writeln!(output).unwrap();
    writeln!(output, "5. Willingness to pay:").unwrap();
    writeln!(
        output,
        "   Would pay something: {}",
        format_pct(pricing.would_pay(), pricing.valid())
    )
    .unwrap();
    writeln!(
        output,
        "   Free only: {}",
        format_pct(pricing.free_only, pricing.valid())
    )
    .unwrap();

    let conversion = &report.conversion;
    writeln!(output).unwrap();
    writeln!(output, "6. Smoke test:").unwrap();
    writeln!(
        output,
        "   High intent: {} ({})",
        conversion.definitely,
        format_pct(conversion.definitely, conversion.intent.denominator)
    )
    .unwrap();
    writeln!(
        output,
        "   Left contact: {} ({})",
        conversion.wants_beta,
        format_pct(conversion.wants_beta, conversion.smoke_test.denominator)
    )
    .unwrap();
    writeln!(output, "   Conversion rate: {}", format_rate(conversion.conversion_rate())).unwrap();
}

fn format_recommendation(
    output: &mut String,
    report: &SurveyReport,
    config: &SurveyConfig,
    formatter: &ColoredFormatter,
) {
    let inputs = &report.inputs;
    let products = &config.products;
    let high_pain = config.thresholds.high_pain;

    section_header(output, "🎯", "FINAL RECOMMENDATION", formatter);

    match report.recommendation {
        Recommendation::OptionB => {
            writeln!(
                output,
                "{} {}",
                formatter.icon("✅"),
                formatter.bold(&format!(
                    "BUILD THE MVP FOR {}",
                    product_label(ProductOption::B, products).to_uppercase()
                ))
            )
            .unwrap();
            writeln!(output, "   Reasons:").unwrap();
            writeln!(
                output,
                "   - High Pain B ({:.2} >= {high_pain})",
                inputs.pain_b_mean
            )
            .unwrap();
            writeln!(
                output,
                "   - {} people prefer B vs {} prefer A",
                inputs.prefer_b, inputs.prefer_a
            )
            .unwrap();
            writeln!(
                output,
                "   - {} forgot a payment in the last 6 months",
                format_pct(
                    report.recurring.forgot(),
                    report.recurring.missed_payments.valid()
                )
            )
            .unwrap();
        }
        Recommendation::OptionA { scope } => {
            writeln!(
                output,
                "{} {}",
                formatter.icon("✅"),
                formatter.bold(&format!(
                    "BUILD THE MVP FOR {}",
                    product_label(ProductOption::A, products).to_uppercase()
                ))
            )
            .unwrap();
            writeln!(output, "   Reasons:").unwrap();
            writeln!(
                output,
                "   - High Pain A ({:.2} >= {high_pain})",
                inputs.pain_a_mean
            )
            .unwrap();
            writeln!(
                output,
                "   - {} people prefer A vs {} prefer B",
                inputs.prefer_a, inputs.prefer_b
            )
            .unwrap();
            match scope {
                Some(ScopeNote::MoneyOnly { pct }) => writeln!(
                    output,
                    "   - {pct:.1}% of the pain is about MONEY (build the MVP for money only)"
                )
                .unwrap(),
                Some(ScopeNote::ObjectsOnly { pct }) => writeln!(
                    output,
                    "   - {pct:.1}% of the pain is about OBJECTS (consider an objects MVP)"
                )
                .unwrap(),
                None => {}
            }
        }
        Recommendation::Both { lead } => {
            writeln!(
                output,
                "{} {}",
                formatter.icon("⚖️"),
                formatter.bold("BOTH OPTIONS ARE VALUABLE")
            )
            .unwrap();
            writeln!(output, "   Reasons:").unwrap();
            writeln!(
                output,
                "   - {} say both are equally useful",
                format_pct(report.comparison.both, report.comparison.valid())
            )
            .unwrap();
            writeln!(
                output,
                "   - Pain B: {:.2}, Pain A: {:.2}",
                inputs.pain_b_mean, inputs.pain_a_mean
            )
            .unwrap();
            writeln!(output).unwrap();
            writeln!(output, "   Recommended strategy:").unwrap();
            let reason = if inputs.pain_a_mean == inputs.pain_b_mean {
                "pain scores tied"
            } else {
                "higher pain score"
            };
            writeln!(
                output,
                "   1. Initial MVP: {} ({reason})",
                product_label(lead, products)
            )
            .unwrap();
            writeln!(output, "   2. Validate with early adopters").unwrap();
            writeln!(output, "   3. Add the second option in phase 2").unwrap();
        }
        Recommendation::Inconclusive => {
            writeln!(
                output,
                "{} {}",
                formatter.icon("ℹ️"),
                formatter.bold("MIXED RESULTS - QUALITATIVE ANALYSIS NEEDED")
            )
            .unwrap();
            writeln!(
                output,
                "   Pain B: {:.2}, Pain A: {:.2}",
                inputs.pain_b_mean, inputs.pain_a_mean
            )
            .unwrap();
            writeln!(
                output,
                "   Prefer B: {}, Prefer A: {}, Both: {}",
                inputs.prefer_b, inputs.prefer_a, report.comparison.both
            )
            .unwrap();
        }
    }
}
