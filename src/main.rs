//! radwarn: Radiation health-effect warning system
//!
//! Main entry point for the command-line front end.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use radwarn::cli::{self, Cli, Commands};
use radwarn::config::Config;

const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize logging.
    //
    // Reports are written to stdout, so logs go to stderr or a file. In auto
    // mode an interactive session on a terminal logs to the file so the
    // prompts stay readable.
    let prompting_terminal =
        matches!(cli.command, Commands::Interactive) && std::io::stdout().is_terminal();
    let use_file = config.log_mode.writes_to_file(prompting_terminal);

    let (writer, _guard) = if use_file {
        if let Some(parent) = config.log_file.parent() {
            // Best-effort: a missing directory surfaces when opening the file.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .with_context(|| format!("Failed to open log file {:?}", config.log_file))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stderr())
    };

    let filter = match cli.log_level.as_deref() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(!use_file),
        )
        .init();

    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(
        "Starting radwarn (log mode {:?}, file logging {})",
        config.log_mode,
        use_file
    );

    cli::run(cli, &config)
}
