//! Rule-based verdicts and the final product recommendation.
//!
//! All functions here are pure: scalar inputs and thresholds in, a verdict
//! out. The recommendation rules are evaluated in strict priority order and
//! the first rule that matches wins:
//!
//! 1. High Option B pain and more people preferring B: build B.
//! 2. High Option A pain and more people preferring A: build A, scoped to
//!    money or objects when one of them dominates the differentiation split.
//! 3. Enough people rate both equally useful: build both, starting with
//!    the higher-pain option.
//! 4. Otherwise the data is inconclusive.

use crate::config::DecisionThresholds;
use std::fmt;

/// The two candidate product directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOption {
    /// Reminders for informal debts
    A,
    /// Reminders for recurring payments
    B,
}

impl fmt::Display for ProductOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("Option A"),
            Self::B => f.write_str("Option B"),
        }
    }
}

/// Shares (percent of valid differentiation answers) per sub-type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DifferentiationSplit {
    pub money_pct: f64,
    pub objects_pct: f64,
    pub both_pct: f64,
    pub avoids_conflict_pct: f64,
}

/// Which sub-type of informal debt concentrates the pain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DifferentiationVerdict {
    MoneyOnly { pct: f64 },
    ObjectsOnly { pct: f64 },
    Distributed { both_pct: f64 },
    Mixed,
}

pub fn classify_differentiation(
    split: &DifferentiationSplit,
    thresholds: &DecisionThresholds,
) -> DifferentiationVerdict {
    if split.money_pct >= thresholds.concentration_pct {
        DifferentiationVerdict::MoneyOnly {
            pct: split.money_pct,
        }
    } else if split.objects_pct >= thresholds.concentration_pct {
        DifferentiationVerdict::ObjectsOnly {
            pct: split.objects_pct,
        }
    } else if split.both_pct >= thresholds.distributed_pct {
        DifferentiationVerdict::Distributed {
            both_pct: split.both_pct,
        }
    } else {
        DifferentiationVerdict::Mixed
    }
}

/// How far stated intent turned into a concrete action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionVerdict {
    CourtesyBias,
    Moderate,
    StrongIntent,
}

pub fn classify_conversion(rate_pct: f64, thresholds: &DecisionThresholds) -> ConversionVerdict {
    if rate_pct < thresholds.courtesy_bias_pct {
        ConversionVerdict::CourtesyBias
    } else if rate_pct >= thresholds.strong_intent_pct {
        ConversionVerdict::StrongIntent
    } else {
        ConversionVerdict::Moderate
    }
}

/// Outcome of the head-to-head preference question alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadToHead {
    Winner(ProductOption),
    Tie,
}

pub fn head_to_head(prefer_a: usize, prefer_b: usize) -> HeadToHead {
    match prefer_b.cmp(&prefer_a) {
        std::cmp::Ordering::Greater => HeadToHead::Winner(ProductOption::B),
        std::cmp::Ordering::Less => HeadToHead::Winner(ProductOption::A),
        std::cmp::Ordering::Equal => HeadToHead::Tie,
    }
}

/// Everything the recommendation depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionInputs {
    pub pain_b_mean: f64,
    pub pain_a_mean: f64,
    pub prefer_b: usize,
    pub prefer_a: usize,
    /// Fraction (0-1) rating both options equally useful
    pub both_fraction: f64,
    /// Money vs objects split, when anybody answered that question
    pub differentiation: Option<DifferentiationSplit>,
}

/// Narrowing of an Option A recommendation to one kind of debt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScopeNote {
    MoneyOnly { pct: f64 },
    ObjectsOnly { pct: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation {
    OptionB,
    OptionA { scope: Option<ScopeNote> },
    Both { lead: ProductOption },
    Inconclusive,
}

impl Recommendation {
    pub fn rule(&self) -> u8 {
        match self {
            Self::OptionB => 1,
            Self::OptionA { .. } => 2,
            Self::Both { .. } => 3,
            Self::Inconclusive => 4,
        }
    }
}

fn scope_note(
    split: Option<&DifferentiationSplit>,
    thresholds: &DecisionThresholds,
) -> Option<ScopeNote> {
    match classify_differentiation(split?, thresholds) {
        DifferentiationVerdict::MoneyOnly { pct } => Some(ScopeNote::MoneyOnly { pct }),
        DifferentiationVerdict::ObjectsOnly { pct } => Some(ScopeNote::ObjectsOnly { pct }),
        DifferentiationVerdict::Distributed { .. } | DifferentiationVerdict::Mixed => None,
    }
}

pub fn recommend(inputs: &DecisionInputs, thresholds: &DecisionThresholds) -> Recommendation {
    let high_pain = f64::from(thresholds.high_pain);

    if inputs.pain_b_mean >= high_pain && inputs.prefer_b > inputs.prefer_a {
        Recommendation::OptionB
    } else if inputs.pain_a_mean >= high_pain && inputs.prefer_a > inputs.prefer_b {
        Recommendation::OptionA {
            scope: scope_note(inputs.differentiation.as_ref(), thresholds),
        }
    } else if inputs.both_fraction >= thresholds.both_fraction {
        // Equal pain leads with B, the option asked about first
        let lead = if inputs.pain_a_mean > inputs.pain_b_mean {
            ProductOption::A
        } else {
            ProductOption::B
        };
        Recommendation::Both { lead }
    } else {
        Recommendation::Inconclusive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> DecisionInputs {
        DecisionInputs {
            pain_b_mean: 5.0,
            pain_a_mean: 5.0,
            prefer_b: 10,
            prefer_a: 10,
            both_fraction: 0.1,
            differentiation: None,
        }
    }

    #[test]
    fn test_rule_1_option_b() {
        let inputs = DecisionInputs {
            pain_b_mean: 7.5,
            prefer_b: 50,
            prefer_a: 20,
            ..inputs()
        };
        assert_eq!(
            recommend(&inputs, &DecisionThresholds::default()),
            Recommendation::OptionB
        );
    }

    #[test]
    fn test_rule_1_needs_both_conditions() {
        let low_pain = DecisionInputs {
            pain_b_mean: 6.9,
            prefer_b: 50,
            prefer_a: 20,
            ..inputs()
        };
        assert_eq!(
            recommend(&low_pain, &DecisionThresholds::default()),
            Recommendation::Inconclusive
        );
    }

    #[test]
    fn test_rule_1_wins_over_rule_2() {
        let inputs = DecisionInputs {
            pain_b_mean: 8.0,
            pain_a_mean: 9.0,
            prefer_b: 30,
            prefer_a: 20,
            both_fraction: 0.9,
            ..inputs()
        };
        assert_eq!(
            recommend(&inputs, &DecisionThresholds::default()),
            Recommendation::OptionB
        );
    }

    #[test]
    fn test_rule_2_option_a_with_money_scope() {
        let inputs = DecisionInputs {
            pain_a_mean: 7.0,
            prefer_a: 40,
            prefer_b: 10,
            differentiation: Some(DifferentiationSplit {
                money_pct: 75.0,
                objects_pct: 15.0,
                both_pct: 10.0,
                avoids_conflict_pct: 0.0,
            }),
            ..inputs()
        };
        assert_eq!(
            recommend(&inputs, &DecisionThresholds::default()),
            Recommendation::OptionA {
                scope: Some(ScopeNote::MoneyOnly { pct: 75.0 })
            }
        );
    }

    #[test]
    fn test_rule_2_option_a_with_objects_scope() {
        let inputs = DecisionInputs {
            pain_a_mean: 8.5,
            prefer_a: 4,
            prefer_b: 1,
            differentiation: Some(DifferentiationSplit {
                money_pct: 20.0,
                objects_pct: 80.0,
                ..Default::default()
            }),
            ..inputs()
        };
        assert_eq!(
            recommend(&inputs, &DecisionThresholds::default()),
            Recommendation::OptionA {
                scope: Some(ScopeNote::ObjectsOnly { pct: 80.0 })
            }
        );
    }

    #[test]
    fn test_rule_2_distributed_split_has_no_scope() {
        let inputs = DecisionInputs {
            pain_a_mean: 8.0,
            prefer_a: 40,
            prefer_b: 10,
            differentiation: Some(DifferentiationSplit {
                money_pct: 30.0,
                objects_pct: 20.0,
                both_pct: 50.0,
                avoids_conflict_pct: 0.0,
            }),
            ..inputs()
        };
        assert_eq!(
            recommend(&inputs, &DecisionThresholds::default()),
            Recommendation::OptionA { scope: None }
        );
    }

    #[test]
    fn test_rule_2_without_concentration_has_no_scope() {
        let inputs = DecisionInputs {
            pain_a_mean: 8.0,
            prefer_a: 40,
            prefer_b: 10,
            differentiation: Some(DifferentiationSplit {
                money_pct: 50.0,
                objects_pct: 50.0,
                ..Default::default()
            }),
            ..inputs()
        };
        assert_eq!(
            recommend(&inputs, &DecisionThresholds::default()),
            Recommendation::OptionA { scope: None }
        );
    }

    #[test]
    fn test_rule_3_both_regardless_of_pain() {
        let thresholds = DecisionThresholds::default();
        for (pain_b, pain_a) in [(9.0, 2.0), (2.0, 9.0), (7.5, 7.5)] {
            let inputs = DecisionInputs {
                pain_b_mean: pain_b,
                pain_a_mean: pain_a,
                prefer_b: 30,
                prefer_a: 30,
                both_fraction: 0.45,
                ..inputs()
            };
            assert_eq!(recommend(&inputs, &thresholds).rule(), 3);
        }
    }

    #[test]
    fn test_rule_3_leads_with_higher_pain() {
        let thresholds = DecisionThresholds::default();
        let a_hurts_more = DecisionInputs {
            pain_b_mean: 4.0,
            pain_a_mean: 6.0,
            both_fraction: 0.40,
            ..inputs()
        };
        assert_eq!(
            recommend(&a_hurts_more, &thresholds),
            Recommendation::Both {
                lead: ProductOption::A
            }
        );

        let tied = DecisionInputs {
            pain_a_mean: 4.0,
            ..a_hurts_more
        };
        assert_eq!(
            recommend(&tied, &thresholds),
            Recommendation::Both {
                lead: ProductOption::B
            }
        );
    }

    #[test]
    fn test_rule_4_inconclusive() {
        assert_eq!(
            recommend(&inputs(), &DecisionThresholds::default()),
            Recommendation::Inconclusive
        );
    }

    #[test]
    fn test_custom_threshold_changes_outcome() {
        let thresholds = DecisionThresholds {
            high_pain: 8,
            ..Default::default()
        };
        let inputs = DecisionInputs {
            pain_b_mean: 7.5,
            prefer_b: 50,
            prefer_a: 20,
            ..inputs()
        };
        assert_eq!(recommend(&inputs, &thresholds), Recommendation::Inconclusive);
    }

    #[test]
    fn test_classify_differentiation_priority() {
        let thresholds = DecisionThresholds::default();
        let verdict = |money, objects, both| {
            classify_differentiation(
                &DifferentiationSplit {
                    money_pct: money,
                    objects_pct: objects,
                    both_pct: both,
                    avoids_conflict_pct: 0.0,
                },
                &thresholds,
            )
        };

        assert_eq!(verdict(70.0, 0.0, 30.0), DifferentiationVerdict::MoneyOnly { pct: 70.0 });
        assert_eq!(verdict(10.0, 80.0, 10.0), DifferentiationVerdict::ObjectsOnly { pct: 80.0 });
        assert_eq!(
            verdict(30.0, 25.0, 45.0),
            DifferentiationVerdict::Distributed { both_pct: 45.0 }
        );
        assert_eq!(verdict(40.0, 35.0, 25.0), DifferentiationVerdict::Mixed);
    }

    #[test]
    fn test_classify_conversion_bands() {
        let thresholds = DecisionThresholds::default();
        assert_eq!(classify_conversion(0.0, &thresholds), ConversionVerdict::CourtesyBias);
        assert_eq!(classify_conversion(59.9, &thresholds), ConversionVerdict::CourtesyBias);
        assert_eq!(classify_conversion(60.0, &thresholds), ConversionVerdict::Moderate);
        assert_eq!(classify_conversion(80.0, &thresholds), ConversionVerdict::StrongIntent);
    }

    #[test]
    fn test_head_to_head() {
        assert_eq!(head_to_head(3, 5), HeadToHead::Winner(ProductOption::B));
        assert_eq!(head_to_head(5, 3), HeadToHead::Winner(ProductOption::A));
        assert_eq!(head_to_head(4, 4), HeadToHead::Tie);
    }
}
