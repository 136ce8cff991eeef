//! Error types for survey loading and configuration.
//!
//! Only two classes of failure abort a run: the export cannot be read
//! (`FileAccess`) or it cannot be understood (`Parse`, `MissingHeader`).
//! Bad individual answers are never errors; the aggregations in
//! [`crate::metrics`] skip them and carry on.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for surveymap operations
#[derive(Debug, Error)]
pub enum Error {
    /// The survey export could not be opened or read
    #[error("Cannot read survey export {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export is not well-formed CSV
    #[error("Parse error in {}{}: {message}", path.display(), line_suffix(*line))]
    Parse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    /// A question the report depends on has no column in the header row
    #[error("Missing expected header in {}: \"{header}\"", path.display())]
    MissingHeader { path: PathBuf, header: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

fn line_suffix(line: Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

impl Error {
    /// Create a parse error from a csv failure, keeping its line number
    pub fn from_csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Parse {
            path: path.into(),
            line: error.position().map(|p| p.line()),
            message: error.to_string(),
        }
    }

    /// Create a parse error with no position information
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line: None,
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
