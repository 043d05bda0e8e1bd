//! Environment-driven settings.
//!
//! - `RADWARN_LOG_MODE`: `auto` (default), `file` or `stderr`. `auto` logs to
//!   the file while an interactive session owns the terminal, else to stderr.
//! - `RADWARN_LOG_FILE`: log path for `file` mode (default `radwarn.log`)
//! - `RADWARN_OUTPUT_FORMAT`: `text` (default) or `json`
//!
//! Invalid values fall back to the default. Logging is not up yet when the
//! config is read, so problems are collected in `warnings` for the caller to
//! log once the subscriber is installed.

use std::path::PathBuf;
use std::str::FromStr;

use crate::ports::OutputFormat;

pub const LOG_MODE_ENV: &str = "RADWARN_LOG_MODE";
pub const LOG_FILE_ENV: &str = "RADWARN_LOG_FILE";
pub const OUTPUT_FORMAT_ENV: &str = "RADWARN_OUTPUT_FORMAT";

const DEFAULT_LOG_FILE: &str = "radwarn.log";

/// Where log output goes. Never stdout: reports are written there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    #[default]
    Auto,
    File,
    Stderr,
}

impl LogMode {
    /// Whether logs go to the log file.
    ///
    /// `prompting_terminal` is true when the interactive session is writing
    /// its prompts to a terminal; stderr output would interleave with them.
    #[must_use]
    pub fn writes_to_file(self, prompting_terminal: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stderr => false,
            Self::Auto => prompting_terminal,
        }
    }
}

impl FromStr for LogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "file" => Ok(Self::File),
            "stderr" => Ok(Self::Stderr),
            other => Err(format!("Unknown log mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    pub output_format: OutputFormat,
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_mode: LogMode::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            output_format: OutputFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_MODE_ENV) {
            match raw.parse::<LogMode>() {
                Ok(mode) => config.log_mode = mode,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_MODE_ENV}: {e}, using 'auto'")),
            }
        }

        if let Some(path) = lookup(LOG_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(OUTPUT_FORMAT_ENV) {
            match raw.parse::<OutputFormat>() {
                Ok(format) => config.output_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{OUTPUT_FORMAT_ENV}: {e}, using 'text'")),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.log_mode, LogMode::Auto);
        assert_eq!(config.log_file, PathBuf::from("radwarn.log"));
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (LOG_MODE_ENV, "file"),
            (LOG_FILE_ENV, "/tmp/rad.log"),
            (OUTPUT_FORMAT_ENV, "json"),
        ]);
        assert_eq!(config.log_mode, LogMode::File);
        assert_eq!(config.log_file, PathBuf::from("/tmp/rad.log"));
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_auto_mode_follows_terminal_session() {
        assert!(LogMode::Auto.writes_to_file(true));
        assert!(!LogMode::Auto.writes_to_file(false));
        assert!(LogMode::File.writes_to_file(false));
        assert!(!LogMode::Stderr.writes_to_file(true));
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let config = config_from(&[(LOG_MODE_ENV, "syslog"), (OUTPUT_FORMAT_ENV, "xml")]);
        assert_eq!(config.log_mode, LogMode::Auto);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.warnings.len(), 2);
    }
}
