use crate::core::metrics::percentage;
use crate::core::{Question, Respondent};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// What a frequency table's percentages are relative to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denominator {
    /// Respondents with a valid answer to this question
    ValidResponses,
    /// Every respondent in the export, answered or not
    Respondents,
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidResponses => f.write_str("valid answers"),
            Self::Respondents => f.write_str("respondents"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
}

/// Answer counts for one question, most frequent first
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    pub question: Question,
    pub buckets: Vec<Bucket>,
    pub basis: Denominator,
    pub denominator: usize,
}

impl FrequencyTable {
    fn from_counts(
        question: Question,
        counts: HashMap<String, usize>,
        basis: Denominator,
        denominator: usize,
    ) -> Self {
        let mut buckets: Vec<Bucket> = counts
            .into_iter()
            .map(|(label, count)| Bucket { label, count })
            .collect();
        // Ties broken by label so the rendered report is reproducible
        buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

        Self {
            question,
            buckets,
            basis,
            denominator,
        }
    }

    pub fn count(&self, label: &str) -> usize {
        self.buckets
            .iter()
            .find(|b| b.label == label)
            .map_or(0, |b| b.count)
    }

    pub fn percentage(&self, label: &str) -> f64 {
        percentage(self.count(label), self.denominator)
    }

    pub fn bucket_percentage(&self, bucket: &Bucket) -> f64 {
        percentage(bucket.count, self.denominator)
    }

    /// Sum of all bucket counts
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Sum of the buckets whose label contains `keyword`
    pub fn count_containing(&self, keyword: &str) -> usize {
        self.buckets
            .iter()
            .filter(|b| b.label.contains(keyword))
            .map(|b| b.count)
            .sum()
    }

    pub fn top(&self, n: usize) -> &[Bucket] {
        &self.buckets[..n.min(self.buckets.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Tally single-select answers; percentages are over valid answers
pub fn tally(respondents: &[Respondent], question: Question) -> FrequencyTable {
    let counts = respondents
        .iter()
        .filter_map(|r| r.answer(question))
        .fold(HashMap::<String, usize>::new(), |mut acc, answer| {
            *acc.entry(answer.to_string()).or_insert(0) += 1;
            acc
        });
    let valid: usize = counts.values().sum();

    FrequencyTable::from_counts(question, counts, Denominator::ValidResponses, valid)
}

/// Tally multi-select answers token by token.
///
/// One respondent may contribute several tokens, so percentages are over
/// the total respondent count rather than the token count. A token repeated
/// within one answer counts once.
pub fn tally_multi_select(
    respondents: &[Respondent],
    question: Question,
    separator: char,
) -> FrequencyTable {
    let counts = respondents
        .iter()
        .filter_map(|r| r.answer(question))
        .flat_map(|answer| {
            answer
                .split(separator)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect::<BTreeSet<_>>()
        })
        .fold(HashMap::<String, usize>::new(), |mut acc, token| {
            *acc.entry(token.to_string()).or_insert(0) += 1;
            acc
        });

    FrequencyTable::from_counts(question, counts, Denominator::Respondents, respondents.len())
}
