use crate::config::{SurveyConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const HEADER: &str = "# Surveymap Configuration
#
# [questions] holds the literal header of each question column in the export,
# [answers] the literal answer options the report counts, and [thresholds]
# the cut-offs used for verdicts and the final recommendation.

";

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

/// Write the default configuration to `path`
pub fn init_config_at(path: &Path, force: bool) -> Result<()> {
    if io::file_exists(path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let body = toml::to_string_pretty(&SurveyConfig::default())
        .context("Failed to serialize default configuration")?;
    io::write_file(path, &format!("{HEADER}{body}"))?;
    log::debug!("Wrote default configuration to {}", path.display());

    Ok(())
}
