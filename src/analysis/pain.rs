//! Pain sections: how much each candidate problem hurts.

use crate::config::AnswerCatalog;
use crate::core::metrics::combine_means;
use crate::core::{Question, Respondent};
use crate::metrics::{aggregate_scale, count_keyword, tally, FrequencyTable, KeywordCount, ScaleStats};

/// Option B: remembering to pay recurring bills
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringPaymentsSection {
    pub stress: ScaleStats,
    /// `matching` = never forgot a payment, `other` = forgot at least once
    pub missed_payments: KeywordCount,
}

impl RecurringPaymentsSection {
    pub fn pain_mean(&self) -> f64 {
        self.stress.mean
    }

    pub fn forgot(&self) -> usize {
        self.missed_payments.other
    }

    pub fn never_forgot(&self) -> usize {
        self.missed_payments.matching
    }
}

pub fn recurring_payments(
    respondents: &[Respondent],
    answers: &AnswerCatalog,
) -> RecurringPaymentsSection {
    RecurringPaymentsSection {
        stress: aggregate_scale(respondents, Question::PainBStress),
        missed_payments: count_keyword(respondents, Question::MissedPayments, &answers.never_keyword),
    }
}

/// Option A: chasing informal debts
#[derive(Debug, Clone, PartialEq)]
pub struct InformalDebtSection {
    pub discomfort: ScaleStats,
    pub stress: ScaleStats,
    pub loan_experience: FrequencyTable,
}

impl InformalDebtSection {
    /// Average of the discomfort and stress means.
    ///
    /// A question nobody answered is left out instead of pulling the
    /// average toward zero.
    pub fn pain_mean(&self) -> f64 {
        combine_means(&[self.discomfort.mean_if_any(), self.stress.mean_if_any()])
    }

    /// High scores across both questions, counted per measurement
    pub fn high_pain_measurements(&self, threshold: u8) -> usize {
        self.discomfort.count_at_least(threshold) + self.stress.count_at_least(threshold)
    }
}

pub fn informal_debt(respondents: &[Respondent]) -> InformalDebtSection {
    InformalDebtSection {
        discomfort: aggregate_scale(respondents, Question::PainADiscomfort),
        stress: aggregate_scale(respondents, Question::PainAStress),
        loan_experience: tally(respondents, Question::LoanExperience),
    }
}
