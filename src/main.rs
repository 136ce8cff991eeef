use anyhow::Result;
use clap::Parser;
use surveymap::cli::{Cli, Commands};
use surveymap::commands::{self, AnalyzeConfig};
use surveymap::formatting::{ColorMode, EmojiMode, FormattingConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            config,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);
            let analyze_config = AnalyzeConfig {
                path,
                config,
                formatting_config: create_formatting_config(plain),
            };
            commands::handle_analyze(analyze_config)
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(force)
        }
    }
}

// Logs go to stderr so stdout carries only the report
fn init_logging(verbosity: u8) {
    let level = log_level(verbosity);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
