pub mod metrics;

use std::collections::BTreeMap;
use std::fmt;

/// Answer text the survey tool writes for a skipped question
pub const PLACEHOLDER: &str = "-";

/// Stable identifier for every survey question the report reads.
///
/// The literal header text of each question lives in configuration and is
/// resolved to a column once, when the export is loaded. Everything after
/// loading addresses answers through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Question {
    /// Forgot to pay a bill in the last six months
    MissedPayments,
    /// Stress of remembering recurring payments (1-10)
    PainBStress,
    /// Lent or borrowed money or objects informally in the last year
    LoanExperience,
    /// Money vs objects: which causes more discomfort
    Differentiation,
    /// Discomfort of reminding someone of a debt (1-10)
    PainADiscomfort,
    /// Stress of managing informal debts (1-10)
    PainAStress,
    /// Which of the two products would be more useful
    DirectComparison,
    /// Preferred reminder channels (multi-select)
    Channels,
    /// Monthly willingness to pay
    WillingnessToPay,
    /// Would try the product today
    Intent,
    /// Smoke test: signed up for the beta
    SmokeTest,
}

impl Question {
    pub const ALL: [Question; 11] = [
        Question::MissedPayments,
        Question::PainBStress,
        Question::LoanExperience,
        Question::Differentiation,
        Question::PainADiscomfort,
        Question::PainAStress,
        Question::DirectComparison,
        Question::Channels,
        Question::WillingnessToPay,
        Question::Intent,
        Question::SmokeTest,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::MissedPayments => "missed_payments",
            Self::PainBStress => "pain_b_stress",
            Self::LoanExperience => "loan_experience",
            Self::Differentiation => "differentiation",
            Self::PainADiscomfort => "pain_a_discomfort",
            Self::PainAStress => "pain_a_stress",
            Self::DirectComparison => "direct_comparison",
            Self::Channels => "channels",
            Self::WillingnessToPay => "willingness_to_pay",
            Self::Intent => "intent",
            Self::SmokeTest => "smoke_test",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// True for answers that carry no information: blank or the `-` placeholder
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == PLACEHOLDER
}

/// One survey submission.
///
/// Questions the respondent's row did not reach are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Respondent {
    answers: BTreeMap<Question, String>,
}

impl Respondent {
    pub fn new(answers: BTreeMap<Question, String>) -> Self {
        Self { answers }
    }

    /// The answer exactly as exported, if the row had a cell for it
    pub fn raw(&self, question: Question) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    /// The trimmed answer, or `None` when it is missing, blank or a placeholder
    pub fn answer(&self, question: Question) -> Option<&str> {
        self.raw(question)
            .filter(|value| !is_placeholder(value))
            .map(str::trim)
    }
}

impl<S: Into<String>> FromIterator<(Question, S)> for Respondent {
    fn from_iter<I: IntoIterator<Item = (Question, S)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(q, a)| (q, a.into())).collect())
    }
}
