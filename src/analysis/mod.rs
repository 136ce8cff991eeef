//! Report generation.
//!
//! [`build_report`] runs every aggregation over the loaded respondents and
//! gathers the results, verdicts and the final recommendation into one
//! [`SurveyReport`]. Nothing here prints; rendering is a separate stage in
//! [`crate::output`].

pub mod adoption;
pub mod pain;
pub mod preference;

pub use adoption::{ChannelSection, ConversionSection, PricingSection};
pub use pain::{InformalDebtSection, RecurringPaymentsSection};
pub use preference::{ComparisonSection, DifferentiationSection};

use crate::config::SurveyConfig;
use crate::core::Respondent;
use crate::decision::{
    classify_conversion, classify_differentiation, recommend, ConversionVerdict, DecisionInputs,
    DifferentiationVerdict, Recommendation,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyReport {
    pub respondents: usize,
    pub recurring: RecurringPaymentsSection,
    pub informal: InformalDebtSection,
    pub differentiation: DifferentiationSection,
    pub comparison: ComparisonSection,
    pub channels: ChannelSection,
    pub pricing: PricingSection,
    pub conversion: ConversionSection,
    pub differentiation_verdict: Option<DifferentiationVerdict>,
    pub conversion_verdict: Option<ConversionVerdict>,
    pub inputs: DecisionInputs,
    pub recommendation: Recommendation,
}

pub fn build_report(respondents: &[Respondent], config: &SurveyConfig) -> SurveyReport {
    let answers = &config.answers;
    let thresholds = &config.thresholds;

    let recurring = pain::recurring_payments(respondents, answers);
    let informal = pain::informal_debt(respondents);
    let differentiation = preference::differentiation(respondents, answers);
    let comparison = preference::comparison(respondents, answers);
    let channels = adoption::channels(respondents, answers);
    let pricing = adoption::pricing(respondents, answers);
    let conversion = adoption::conversion(respondents, answers);

    let split = differentiation.split();
    let inputs = DecisionInputs {
        pain_b_mean: recurring.pain_mean(),
        pain_a_mean: informal.pain_mean(),
        prefer_b: comparison.prefer_b,
        prefer_a: comparison.prefer_a,
        both_fraction: comparison.both_fraction(),
        differentiation: split,
    };
    let recommendation = recommend(&inputs, thresholds);
    log::debug!("Decision inputs {:?} -> {:?}", inputs, recommendation);

    SurveyReport {
        respondents: respondents.len(),
        differentiation_verdict: split.map(|s| classify_differentiation(&s, thresholds)),
        conversion_verdict: conversion
            .conversion_rate()
            .map(|rate| classify_conversion(rate, thresholds)),
        recurring,
        informal,
        differentiation,
        comparison,
        channels,
        pricing,
        conversion,
        inputs,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnswerCatalog;
    use crate::core::Question;
    use crate::decision::ProductOption;

    fn respondent(pairs: &[(Question, &str)]) -> Respondent {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_empty_survey_is_inconclusive_and_safe() {
        let report = build_report(&[], &SurveyConfig::default());

        assert_eq!(report.respondents, 0);
        assert_eq!(report.inputs.pain_b_mean, 0.0);
        assert_eq!(report.inputs.both_fraction, 0.0);
        assert_eq!(report.differentiation_verdict, None);
        assert_eq!(report.conversion_verdict, None);
        assert_eq!(report.recommendation, Recommendation::Inconclusive);
    }

    #[test]
    fn test_recurring_payments_win() {
        let catalog = AnswerCatalog::default();
        let mut rows: Vec<Respondent> = (0..5)
            .map(|_| {
                respondent(&[
                    (Question::PainBStress, "9"),
                    (Question::DirectComparison, catalog.prefer_b.as_str()),
                ])
            })
            .collect();
        rows.push(respondent(&[
            (Question::PainBStress, "5"),
            (Question::DirectComparison, catalog.prefer_a.as_str()),
        ]));

        let report = build_report(&rows, &SurveyConfig::default());

        assert!(report.inputs.pain_b_mean >= 7.0);
        assert_eq!(report.inputs.prefer_b, 5);
        assert_eq!(report.inputs.prefer_a, 1);
        assert_eq!(report.recommendation, Recommendation::OptionB);
    }

    #[test]
    fn test_both_fraction_feeds_rule_three() {
        let catalog = AnswerCatalog::default();
        let rows: Vec<Respondent> = [
            catalog.both_useful.as_str(),
            catalog.both_useful.as_str(),
            catalog.prefer_a.as_str(),
            catalog.prefer_b.as_str(),
            "-",
        ]
        .iter()
        .map(|a| respondent(&[(Question::DirectComparison, *a), (Question::PainAStress, "6")]))
        .collect();

        let report = build_report(&rows, &SurveyConfig::default());

        // 2 of 4 valid comparison answers
        assert_eq!(report.inputs.both_fraction, 0.5);
        assert_eq!(
            report.recommendation,
            Recommendation::Both {
                lead: ProductOption::A
            }
        );
    }

    #[test]
    fn test_report_is_deterministic() {
        let rows = vec![
            respondent(&[(Question::Channels, "SMS, Email"), (Question::PainBStress, "4")]),
            respondent(&[(Question::Channels, "Email, SMS"), (Question::PainBStress, "8")]),
        ];
        let config = SurveyConfig::default();
        assert_eq!(build_report(&rows, &config), build_report(&rows, &config));
    }
}
