//! Per-question aggregations.
//!
//! Every function here reads the full, immutable respondent list and
//! returns a fresh result. Answers that are missing, blank, placeholders or
//! unparseable are skipped for that question only; they never abort the
//! aggregation and never count toward its denominator.

pub mod frequency;
pub mod keyword;
pub mod scale;

pub use frequency::{tally, tally_multi_select, Bucket, Denominator, FrequencyTable};
pub use keyword::{count_keyword, KeywordCount};
pub use scale::{aggregate_scale, parse_scale, ScaleStats, SCALE_MAX, SCALE_MIN};
