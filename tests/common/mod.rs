// Test utility module for surveymap integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use surveymap::config::{AnswerCatalog, QuestionLabels};
use surveymap::Question;

/// Column the survey tool adds before the questions; the report ignores it
pub const TIMESTAMP_HEADER: &str = "Marca temporal";

/// One exported row: answers by question, everything else left blank
#[derive(Debug, Clone, Default)]
pub struct Row {
    answers: Vec<(Question, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question: Question, answer: impl Into<String>) -> Self {
        self.answers.push((question, answer.into()));
        self
    }

    fn cell(&self, question: Question) -> &str {
        self.answers
            .iter()
            .rev()
            .find(|(q, _)| *q == question)
            .map_or("", |(_, a)| a.as_str())
    }
}

/// Write a CSV export with the default question headers
pub fn write_survey(dir: &Path, name: &str, rows: &[Row]) -> PathBuf {
    let labels = QuestionLabels::default();
    let path = dir.join(name);
    let mut writer = csv::Writer::from_path(&path).unwrap();

    let mut header = vec![TIMESTAMP_HEADER.to_string()];
    header.extend(Question::ALL.iter().map(|q| labels.label(*q).to_string()));
    writer.write_record(&header).unwrap();

    for (idx, row) in rows.iter().enumerate() {
        let mut record = vec![format!("2025/01/{:02} 10:00", idx % 28 + 1)];
        record.extend(Question::ALL.iter().map(|q| row.cell(*q).to_string()));
        writer.write_record(&record).unwrap();
    }
    writer.flush().unwrap();
    path
}

/// Ten respondents whose answers favour recurring-payment reminders
pub fn recurring_payments_survey() -> Vec<Row> {
    let answers = AnswerCatalog::default();
    let scores = ["7", "8", "9", "6", "7", "8", "9", "10", "-", ""];
    scores
        .iter()
        .enumerate()
        .map(|(idx, score)| {
            let preference = if idx < 7 {
                answers.prefer_b.as_str()
            } else {
                answers.prefer_a.as_str()
            };
            let missed = if idx % 2 == 0 { "Sí, 1 vez" } else { "Nunca" };
            Row::new()
                .with(Question::MissedPayments, missed)
                .with(Question::PainBStress, *score)
                .with(Question::PainADiscomfort, "5")
                .with(Question::PainAStress, "4")
                .with(Question::DirectComparison, preference)
                .with(Question::Channels, "WhatsApp, Email")
                .with(Question::WillingnessToPay, answers.free_only.as_str())
                .with(Question::Intent, answers.intent_definitely.as_str())
                .with(Question::SmokeTest, answers.wants_beta.as_str())
        })
        .collect()
}
