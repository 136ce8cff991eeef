mod common;

use common::{recurring_payments_survey, write_survey, Row};
use pretty_assertions::assert_eq;
use std::fs;
use surveymap::config::{QuestionLabels, SurveyConfig};
use surveymap::{build_report, read_survey, Error, Question, Recommendation};
use tempfile::TempDir;

#[test]
fn test_read_survey_resolves_default_headers() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_survey(temp_dir.path(), "survey.csv", &recurring_payments_survey());

    let respondents = read_survey(&path, &QuestionLabels::default()).unwrap();

    assert_eq!(respondents.len(), 10);
    assert_eq!(respondents[0].answer(Question::PainBStress), Some("7"));
    assert_eq!(respondents[8].answer(Question::PainBStress), None);
    assert_eq!(respondents[8].raw(Question::PainBStress), Some("-"));
    assert_eq!(
        respondents[9].answer(Question::Channels),
        Some("WhatsApp, Email")
    );
}

#[test]
fn test_pain_b_scenario_from_export() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_survey(temp_dir.path(), "survey.csv", &recurring_payments_survey());
    let config = SurveyConfig::default();

    let respondents = read_survey(&path, &config.questions).unwrap();
    let report = build_report(&respondents, &config);

    let stress = &report.recurring.stress;
    assert_eq!(stress.valid(), 8);
    assert_eq!(stress.mean, 8.0);
    assert_eq!(stress.median, 8.0);
    assert_eq!(stress.count_at_least(7), 7);
    assert_eq!(stress.percentage_at_least(7), 87.5);
    // The "-" answer still counts toward the channel tally
    assert_eq!(report.channels.table.count("WhatsApp"), 10);
    assert_eq!(report.recommendation, Recommendation::OptionB);
}

#[test]
fn test_missing_file_is_file_access_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_survey(&temp_dir.path().join("nope.csv"), &QuestionLabels::default())
        .unwrap_err();

    assert!(matches!(err, Error::FileAccess { .. }));
}

#[test]
fn test_missing_header_error_names_header() {
    let temp_dir = TempDir::new().unwrap();
    let labels = QuestionLabels::default();
    let path = write_survey(temp_dir.path(), "survey.csv", &[Row::new()]);

    // Drop the smoke-test column from the header row
    let contents = fs::read_to_string(&path).unwrap();
    let trimmed = contents.replacen(&labels.smoke_test, "Q31. Otra", 1);
    fs::write(&path, trimmed).unwrap();

    match read_survey(&path, &labels).unwrap_err() {
        Error::MissingHeader { header, .. } => assert_eq!(header, labels.smoke_test),
        other => panic!("Expected MissingHeader, got {other:?}"),
    }
}

#[test]
fn test_empty_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let err = read_survey(&path, &QuestionLabels::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}
