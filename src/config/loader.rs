use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SurveyConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".surveymap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<SurveyConfig, String> {
    let config = toml::from_str::<SurveyConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    config.validate()?;
    Ok(config)
}

/// Load a config file the user named explicitly; any failure is fatal
pub fn load_config_from(path: &Path) -> Result<SurveyConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let config = parse_and_validate_config(&contents)
        .map_err(|e| Error::Config(format!("{} ({})", e, path.display())))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading a discovered config file
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SurveyConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: PathBuf) -> SurveyConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SurveyConfig::default()
        })
}

/// Resolve the configuration for a run.
///
/// An explicit path must load cleanly. Without one, the current directory
/// and its ancestors are searched and the built-in survey layout is the
/// fallback.
pub fn load_config(explicit: Option<&Path>) -> Result<SurveyConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(SurveyConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("exports").join("2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nhigh_pain = 8\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.thresholds.high_pain, 8);
    }

    #[test]
    fn test_invalid_discovered_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nboth_fraction = 3.0\n",
        )
        .unwrap();

        let config = discover_config(temp.path().to_path_buf());
        assert_eq!(config, SurveyConfig::default());
    }

    #[test]
    fn test_explicit_config_errors_are_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("survey.toml");
        fs::write(&path, "[thresholds\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let missing = temp.path().join("absent.toml");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_config_loads() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("survey.toml");
        fs::write(&path, "[products]\noption_a = \"Loans\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.products.option_a, "Loans");
        assert_eq!(config.products.option_b, "Recurring payments");
    }
}
