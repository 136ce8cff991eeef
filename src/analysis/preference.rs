//! Preference sections: which kind of debt hurts most, and which product
//! respondents would rather have.

use crate::config::AnswerCatalog;
use crate::core::metrics::{fraction, percentage};
use crate::core::{Question, Respondent};
use crate::decision::{head_to_head, DifferentiationSplit, HeadToHead};
use crate::metrics::{tally, FrequencyTable};

#[derive(Debug, Clone, PartialEq)]
pub struct DifferentiationSection {
    pub table: FrequencyTable,
    pub money: usize,
    pub objects: usize,
    pub both: usize,
    pub avoids_conflict: usize,
}

impl DifferentiationSection {
    pub fn valid(&self) -> usize {
        self.table.denominator
    }

    /// Percent split over valid answers; `None` when nobody answered
    pub fn split(&self) -> Option<DifferentiationSplit> {
        let valid = self.valid();
        (valid > 0).then(|| DifferentiationSplit {
            money_pct: percentage(self.money, valid),
            objects_pct: percentage(self.objects, valid),
            both_pct: percentage(self.both, valid),
            avoids_conflict_pct: percentage(self.avoids_conflict, valid),
        })
    }
}

pub fn differentiation(respondents: &[Respondent], answers: &AnswerCatalog) -> DifferentiationSection {
    let table = tally(respondents, Question::Differentiation);
    DifferentiationSection {
        money: table.count(&answers.money),
        objects: table.count(&answers.objects),
        both: table.count(&answers.both_equally),
        avoids_conflict: table.count(&answers.avoids_conflict),
        table,
    }
}

/// Direct A vs B comparison; every share is over valid answers
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSection {
    pub table: FrequencyTable,
    pub prefer_a: usize,
    pub prefer_b: usize,
    pub both: usize,
    pub neither: usize,
}

impl ComparisonSection {
    pub fn valid(&self) -> usize {
        self.table.denominator
    }

    /// Fraction (0-1) rating both options equally useful
    pub fn both_fraction(&self) -> f64 {
        fraction(self.both, self.valid())
    }

    /// Preference for A counting "both" as interest too
    pub fn interest_a(&self) -> usize {
        self.prefer_a + self.both
    }

    pub fn interest_b(&self) -> usize {
        self.prefer_b + self.both
    }

    pub fn winner(&self) -> HeadToHead {
        head_to_head(self.prefer_a, self.prefer_b)
    }
}

pub fn comparison(respondents: &[Respondent], answers: &AnswerCatalog) -> ComparisonSection {
    let table = tally(respondents, Question::DirectComparison);
    ComparisonSection {
        prefer_a: table.count(&answers.prefer_a),
        prefer_b: table.count(&answers.prefer_b),
        both: table.count(&answers.both_useful),
        neither: table.count(&answers.neither_useful),
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::ProductOption;

    fn rows(question: Question, answers: &[&str]) -> Vec<Respondent> {
        answers
            .iter()
            .map(|a| [(question, *a)].into_iter().collect())
            .collect()
    }

    #[test]
    fn test_differentiation_split_over_valid_answers() {
        let catalog = AnswerCatalog::default();
        let mut answers = vec![catalog.money.as_str(); 6];
        answers.extend([catalog.objects.as_str(), catalog.both_equally.as_str(), "-", ""]);
        let rows = rows(Question::Differentiation, &answers);

        let section = differentiation(&rows, &catalog);
        let split = section.split().unwrap();

        assert_eq!(section.valid(), 8);
        assert_eq!(split.money_pct, 75.0);
        assert_eq!(split.objects_pct, 12.5);
        assert_eq!(split.both_pct, 12.5);
        assert_eq!(split.avoids_conflict_pct, 0.0);
    }

    #[test]
    fn test_differentiation_without_answers_has_no_split() {
        let section = differentiation(&[], &AnswerCatalog::default());
        assert_eq!(section.split(), None);
    }

    #[test]
    fn test_comparison_counts_and_fraction() {
        let catalog = AnswerCatalog::default();
        let rows = rows(
            Question::DirectComparison,
            &[
                catalog.prefer_b.as_str(),
                catalog.prefer_b.as_str(),
                catalog.prefer_a.as_str(),
                catalog.both_useful.as_str(),
                catalog.both_useful.as_str(),
                catalog.neither_useful.as_str(),
                "-",
            ],
        );
        let section = comparison(&rows, &catalog);

        assert_eq!(section.valid(), 6);
        assert_eq!(section.prefer_b, 2);
        assert_eq!(section.prefer_a, 1);
        assert_eq!(section.neither, 1);
        assert!((section.both_fraction() - 2.0 / 6.0).abs() < 1e-12);
        assert_eq!(section.interest_b(), 4);
        assert_eq!(section.interest_a(), 3);
        assert_eq!(section.winner(), HeadToHead::Winner(ProductOption::B));
    }
}
