use serde::{Deserialize, Serialize};

/// Cut-offs used by the report verdicts and the final recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// Scores at or above this are "high pain"; a pain mean at or above it
    /// qualifies an option for recommendation (default: 7)
    #[serde(default = "default_high_pain")]
    pub high_pain: u8,

    /// Scores at or above this are "moderate pain" (default: 5)
    #[serde(default = "default_moderate_pain")]
    pub moderate_pain: u8,

    /// Share of differentiation answers (percent) that makes money or
    /// objects the dominant pain (default: 70.0)
    #[serde(default = "default_concentration_pct")]
    pub concentration_pct: f64,

    /// Share of differentiation answers (percent) saying "both" that marks
    /// the pain as distributed (default: 40.0)
    #[serde(default = "default_distributed_pct")]
    pub distributed_pct: f64,

    /// Fraction of comparison answers rating both products equally useful
    /// that recommends building both (default: 0.40)
    #[serde(default = "default_both_fraction")]
    pub both_fraction: f64,

    /// Conversion below this percentage signals courtesy bias (default: 60.0)
    #[serde(default = "default_courtesy_bias_pct")]
    pub courtesy_bias_pct: f64,

    /// Conversion at or above this percentage signals real intent (default: 80.0)
    #[serde(default = "default_strong_intent_pct")]
    pub strong_intent_pct: f64,

    /// Channels listed in the channel section (default: 10)
    #[serde(default = "default_top_channels")]
    pub top_channels: usize,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            high_pain: default_high_pain(),
            moderate_pain: default_moderate_pain(),
            concentration_pct: default_concentration_pct(),
            distributed_pct: default_distributed_pct(),
            both_fraction: default_both_fraction(),
            courtesy_bias_pct: default_courtesy_bias_pct(),
            strong_intent_pct: default_strong_intent_pct(),
            top_channels: default_top_channels(),
        }
    }
}

impl DecisionThresholds {
    /// Check every threshold is in range, reporting all problems at once
    pub fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();

        for (name, value) in [("high_pain", self.high_pain), ("moderate_pain", self.moderate_pain)] {
            if !(1..=10).contains(&value) {
                problems.push(format!("{name} must be between 1 and 10, got {value}"));
            }
        }
        if self.moderate_pain > self.high_pain {
            problems.push(format!(
                "moderate_pain ({}) must not exceed high_pain ({})",
                self.moderate_pain, self.high_pain
            ));
        }

        for (name, value) in [
            ("concentration_pct", self.concentration_pct),
            ("distributed_pct", self.distributed_pct),
            ("courtesy_bias_pct", self.courtesy_bias_pct),
            ("strong_intent_pct", self.strong_intent_pct),
        ] {
            if !(0.0..=100.0).contains(&value) {
                problems.push(format!("{name} must be between 0 and 100, got {value}"));
            }
        }
        if self.courtesy_bias_pct > self.strong_intent_pct {
            problems.push(format!(
                "courtesy_bias_pct ({}) must not exceed strong_intent_pct ({})",
                self.courtesy_bias_pct, self.strong_intent_pct
            ));
        }

        if !(0.0..=1.0).contains(&self.both_fraction) {
            problems.push(format!(
                "both_fraction must be between 0 and 1, got {}",
                self.both_fraction
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}

fn default_high_pain() -> u8 {
    7
}
fn default_moderate_pain() -> u8 {
    5
}
fn default_concentration_pct() -> f64 {
    70.0
}
fn default_distributed_pct() -> f64 {
    40.0
}
fn default_both_fraction() -> f64 {
    0.40
}
fn default_courtesy_bias_pct() -> f64 {
    60.0
}
fn default_strong_intent_pct() -> f64 {
    80.0
}
fn default_top_channels() -> usize {
    10
}
