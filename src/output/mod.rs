pub mod terminal;

pub use terminal::{format_pct, format_report};
