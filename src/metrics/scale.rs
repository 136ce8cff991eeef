use crate::core::metrics::{calculate_mean, calculate_median, count_at_least, percentage};
use crate::core::{Question, Respondent};

pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 10;

/// Aggregate of a 1-10 rating question
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaleStats {
    pub question: Option<Question>,
    /// Valid scores, in respondent order
    pub scores: Vec<u8>,
    /// Answers present but not an integer in range
    pub rejected: usize,
    pub mean: f64,
    pub median: f64,
}

impl ScaleStats {
    pub fn from_scores(scores: Vec<u8>) -> Self {
        Self {
            question: None,
            mean: calculate_mean(&scores),
            median: calculate_median(&scores),
            scores,
            rejected: 0,
        }
    }

    pub fn valid(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The mean, or `None` when nobody gave a valid score
    pub fn mean_if_any(&self) -> Option<f64> {
        (!self.is_empty()).then_some(self.mean)
    }

    pub fn count_at_least(&self, threshold: u8) -> usize {
        count_at_least(&self.scores, threshold)
    }

    /// Share of valid scores at or above `threshold`, over valid scores only
    pub fn percentage_at_least(&self, threshold: u8) -> f64 {
        percentage(self.count_at_least(threshold), self.valid())
    }
}

/// Parse a rating; anything that is not an integer in 1..=10 is rejected
pub fn parse_scale(answer: &str) -> Option<u8> {
    answer
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|score| (SCALE_MIN..=SCALE_MAX).contains(score))
}

pub fn aggregate_scale(respondents: &[Respondent], question: Question) -> ScaleStats {
    let (scores, rejected) = respondents
        .iter()
        .filter_map(|r| r.answer(question))
        .fold((Vec::new(), 0usize), |(mut scores, rejected), answer| {
            match parse_scale(answer) {
                Some(score) => {
                    scores.push(score);
                    (scores, rejected)
                }
                None => (scores, rejected + 1),
            }
        });

    if rejected > 0 {
        log::debug!(
            "{}: skipped {} answer(s) that are not a 1-10 score",
            question,
            rejected
        );
    }

    ScaleStats {
        question: Some(question),
        rejected,
        ..ScaleStats::from_scores(scores)
    }
}
