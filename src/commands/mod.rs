//! CLI command implementations for surveymap.
//!
//! Available commands:
//! - **analyze**: Load a survey export and print the decision report
//! - **init**: Initialize a new surveymap configuration file

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, render_report, AnalyzeConfig};
pub use init::{init_config, init_config_at};
