//! CLI command definitions and handlers

mod interactive;

pub use interactive::{run_session, SessionStats};

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::adapters::renderer_for;
use crate::application::AssessmentService;
use crate::config::Config;
use crate::domain::limits::{OCCUPATIONAL_ANNUAL_LIMIT, PUBLIC_ANNUAL_LIMIT};
use crate::domain::{format_quantity, protection, DoseError};
use crate::ports::OutputFormat;
use crate::RadwarnError;

/// Exit code for a rejected submission.
pub const EXIT_REJECTED: u8 = 2;

/// Selector defaults of the warning form.
pub const DEFAULT_UNIT: &str = "R";
pub const DEFAULT_RADIATION_TYPE: &str = "Gamma";

/// radwarn - Radiation health-effect warning system
#[derive(Parser, Debug)]
#[command(name = "radwarn")]
#[command(
    version,
    about = "Estimate health risk from a radiation exposure reading and recommend protective actions",
    after_help = "\
Examples:
  radwarn assess 2                        2 R of gamma radiation
  radwarn assess 0.5 --unit Sv            Dose already in Sievert
  radwarn assess 1 -u Ci -t Alpha -f json JSON report
  radwarn effective 0.02 --type Beta      Weighted effective dose
  radwarn interactive                     Repeated submissions from stdin"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG applies when omitted
    #[arg(long, global = true, value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: Option<String>,

    /// Report format: text, json (default: RADWARN_OUTPUT_FORMAT or text)
    #[arg(long, short = 'f', global = true, value_parser = ["text", "json"])]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess one exposure reading
    Assess {
        /// Exposure value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit: R (Roentgen), Ci (Curie), Gy (Gray), Sv (Sievert)
        #[arg(long, short = 'u', default_value = DEFAULT_UNIT)]
        unit: String,

        /// Radiation type: Gamma, Alpha, Beta
        #[arg(long = "type", short = 't', default_value = DEFAULT_RADIATION_TYPE)]
        radiation_type: String,
    },

    /// Weight a dose in Sievert by radiation type (unknown types weigh 1)
    Effective {
        /// Dose in Sievert
        #[arg(allow_hyphen_values = true)]
        dose: String,

        /// Radiation type: Gamma, Alpha, Beta
        #[arg(long = "type", short = 't', default_value = DEFAULT_RADIATION_TYPE)]
        radiation_type: String,
    },

    /// List the general protection principles
    Protection,

    /// Show the annual dose limits
    Limits,

    /// Read submissions from stdin until 'quit' or end of input
    Interactive,
}

/// User-facing message for a rejected submission.
#[must_use]
pub fn user_message(err: &DoseError) -> String {
    match err {
        DoseError::InvalidNumericInput(_) => {
            "Invalid Input: Please enter a valid number for the radiation dose.".to_string()
        }
        other => format!("Invalid Input: {other}"),
    }
}

/// Run a parsed command line.
///
/// Rejected input is reported on stderr and mapped to [`EXIT_REJECTED`];
/// only I/O and encoding failures surface as errors.
///
/// # Errors
/// Returns error if writing the output fails.
pub fn run(cli: Cli, config: &Config) -> Result<ExitCode> {
    let format = match cli.format.as_deref() {
        Some(raw) => raw.parse::<OutputFormat>()?,
        None => config.output_format,
    };
    let one_per_line = matches!(cli.command, Commands::Interactive);
    let service = AssessmentService::new(renderer_for(format, one_per_line));
    tracing::debug!("Report format: {}", service.renderer().format());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Assess {
            value,
            unit,
            radiation_type,
        } => match service.submit(&value, &unit, &radiation_type) {
            Ok(report) => {
                writeln!(out, "{}", report.trim_end())?;
                Ok(ExitCode::SUCCESS)
            }
            Err(RadwarnError::Dose(e)) => {
                eprintln!("{}", user_message(&e));
                Ok(ExitCode::from(EXIT_REJECTED))
            }
            Err(e) => Err(e.into()),
        },

        Commands::Effective {
            dose,
            radiation_type,
        } => match service.effective_dose_input(&dose, &radiation_type) {
            Ok((weighted, recognized)) => {
                let weighting = recognized
                    .map_or_else(|| "default weighting".to_string(), |t| t.to_string());
                writeln!(
                    out,
                    "Effective dose ({}): {} ({} mSv)",
                    weighting,
                    weighted,
                    format_quantity(weighted.millisieverts())
                )?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", user_message(&e));
                Ok(ExitCode::from(EXIT_REJECTED))
            }
        },

        Commands::Protection => {
            for (name, description) in protection::entries() {
                writeln!(out, "{name}: {description}")?;
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Limits => {
            writeln!(
                out,
                "Occupational annual dose limit: {} mSv",
                format_quantity(OCCUPATIONAL_ANNUAL_LIMIT.millisieverts())
            )?;
            writeln!(
                out,
                "Public annual dose limit: {} mSv",
                format_quantity(PUBLIC_ANNUAL_LIMIT.millisieverts())
            )?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            let stats = run_session(&service, stdin.lock(), &mut out)?;
            tracing::info!(
                "Interactive session ended: {} assessed, {} rejected",
                stats.assessed,
                stats.rejected
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
