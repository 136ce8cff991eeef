// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod decision;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod metrics;
pub mod output;

// Re-export commonly used types
pub use crate::core::{Question, Respondent};

pub use crate::analysis::{build_report, SurveyReport};

pub use crate::config::{load_config, DecisionThresholds, SurveyConfig};

pub use crate::decision::{recommend, DecisionInputs, ProductOption, Recommendation};

pub use crate::errors::{Error, Result};

pub use crate::io::{parse_survey, read_survey};

pub use crate::metrics::{
    aggregate_scale, count_keyword, tally, tally_multi_select, FrequencyTable, KeywordCount,
    ScaleStats,
};

pub use crate::output::format_report;
