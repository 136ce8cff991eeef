use crate::analysis::build_report;
use crate::config::load_config;
use crate::formatting::FormattingConfig;
use crate::io;
use crate::output;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
}

/// Load, aggregate and render; returns the full report text.
///
/// Any failure happens before rendering starts, so a caller never sees a
/// partial report.
pub fn render_report(config: &AnalyzeConfig) -> Result<String> {
    let survey_config = load_config(config.config.as_deref())
        .context("Failed to load configuration")?;

    let respondents = io::read_survey(&config.path, &survey_config.questions)
        .with_context(|| format!("Failed to load survey export {}", config.path.display()))?;

    let report = build_report(&respondents, &survey_config);
    log::info!(
        "Recommendation for {} respondents: rule {}",
        report.respondents,
        report.recommendation.rule()
    );

    Ok(output::format_report(
        &report,
        &survey_config,
        config.formatting_config,
    ))
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let report = render_report(&config)?;
    print!("{report}");
    Ok(())
}
