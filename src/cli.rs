use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "surveymap")]
#[command(about = "Survey export analyzer for product decisions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the survey report and recommendation from a CSV export
    Analyze {
        /// Path to the CSV export
        path: PathBuf,

        /// Configuration file (defaults to the nearest .surveymap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Plain output: no colors, ASCII tags instead of emoji
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        ///
        /// Logs go to stderr; RUST_LOG takes precedence when set.
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_analyze_command() {
        let args = vec![
            "surveymap",
            "analyze",
            "/data/survey.csv",
            "--config",
            "/config/survey.toml",
            "--plain",
            "-vv",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Analyze {
                path,
                config,
                plain,
                verbosity,
            } => {
                assert_eq!(path, PathBuf::from("/data/survey.csv"));
                assert_eq!(config, Some(PathBuf::from("/config/survey.toml")));
                assert!(plain);
                assert_eq!(verbosity, 2);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["surveymap", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_analyze_requires_path() {
        assert!(Cli::try_parse_from(["surveymap", "analyze"]).is_err());
    }
}
