//! Loading a survey export into respondent records.
//!
//! The header row is resolved against the configured question labels once,
//! up front. Every expected question must have a column; after that, rows
//! are read leniently: a short row simply leaves its trailing questions
//! unanswered.

use crate::config::QuestionLabels;
use crate::core::{Question, Respondent};
use crate::errors::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Column index of each question in the export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: Vec<(Question, usize)>,
}

impl ColumnMap {
    fn respondent(&self, record: &StringRecord) -> Respondent {
        self.columns
            .iter()
            .filter_map(|(question, idx)| record.get(*idx).map(|value| (*question, value)))
            .collect()
    }
}

fn normalize_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

/// Map every question to its header column, failing on the first one missing
pub fn resolve_columns(
    headers: &StringRecord,
    labels: &QuestionLabels,
    source: &Path,
) -> Result<ColumnMap> {
    let columns = Question::ALL
        .iter()
        .map(|&question| {
            let label = labels.label(question).trim();
            headers
                .iter()
                .position(|header| normalize_header(header) == label)
                .map(|idx| (question, idx))
                .ok_or_else(|| Error::MissingHeader {
                    path: source.to_path_buf(),
                    header: label.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ColumnMap { columns })
}

/// Parse an export from any reader; `source` is only used in error messages
pub fn parse_survey<R: Read>(
    reader: R,
    labels: &QuestionLabels,
    source: &Path,
) -> Result<Vec<Respondent>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::from_csv(source, &e))?
        .clone();
    if headers.is_empty() {
        return Err(Error::parse(source, "missing header row"));
    }

    let columns = resolve_columns(&headers, labels, source)?;
    log::debug!(
        "Resolved {} question columns out of {} headers",
        Question::ALL.len(),
        headers.len()
    );

    let respondents = rdr
        .records()
        .map(|record| {
            record
                .map(|r| columns.respondent(&r))
                .map_err(|e| Error::from_csv(source, &e))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(respondents)
}

/// Read a survey export from disk.
///
/// The file handle is released as soon as the last row is parsed.
pub fn read_survey(path: &Path, labels: &QuestionLabels) -> Result<Vec<Respondent>> {
    let file = File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let respondents = parse_survey(BufReader::new(file), labels, path)?;
    log::info!(
        "Loaded {} respondents from {}",
        respondents.len(),
        path.display()
    );
    Ok(respondents)
}
