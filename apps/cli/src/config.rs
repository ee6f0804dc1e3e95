use std::{path::PathBuf, str::FromStr};

use clap::ValueEnum;
use folioview_core::constants::DEFAULT_SNAPSHOT_PATH;
use folioview_core::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parses `FV_OUTPUT_FORMAT` with the same names the `--format` flag accepts.
impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s, true).map_err(|_| {
            Error::InvalidConfigValue(format!(
                "output format '{}' (expected text or json)",
                s
            ))
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub output_format: OutputFormat,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot_path: PathBuf = lookup("FV_SNAPSHOT_PATH")
            .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string())
            .into();
        let output_format: OutputFormat = lookup("FV_OUTPUT_FORMAT")
            .unwrap_or_else(|| "text".to_string())
            .parse()?;
        let log_format = lookup("FV_LOG_FORMAT").unwrap_or_else(|| "text".to_string());
        Ok(Self {
            snapshot_path,
            output_format,
            log_format,
        })
    }

    /// Applies command line overrides on top of the environment.
    pub fn with_overrides(mut self, input: Option<PathBuf>, format: Option<OutputFormat>) -> Self {
        if let Some(path) = input {
            self.snapshot_path = path;
        }
        if let Some(format) = format {
            self.output_format = format;
        }
        self
    }
}
