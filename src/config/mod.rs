#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{CommitMode, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_csv_extension, validate_path, Validate};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input_delimiter: u8,
    pub output_delimiter: u8,
    pub commit_mode: CommitMode,
    pub dry_run: bool,
    pub monitor: bool,
    pub log_format: LogFormat,
}

impl RunConfig {
    pub fn new(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
            input_delimiter: b',',
            output_delimiter: b',',
            commit_mode: CommitMode::default(),
            dry_run: false,
            monitor: false,
            log_format: LogFormat::default(),
        }
    }

    /// Settings file values are applied on top of the defaults.
    pub fn apply_toml(mut self, toml: &TomlConfig) -> Result<Self> {
        if let Some(delimiter) = toml.input_delimiter()? {
            self.input_delimiter = delimiter;
        }
        if let Some(delimiter) = toml.output_delimiter()? {
            self.output_delimiter = delimiter;
        }
        if let Some(mode) = toml.output.commit {
            self.commit_mode = mode;
        }
        if let Some(format) = toml.logging.format {
            self.log_format = format;
        }
        self.monitor |= toml.monitoring.enabled;
        Ok(self)
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn input_delimiter(&self) -> u8 {
        self.input_delimiter
    }

    fn output_delimiter(&self) -> u8 {
        self.output_delimiter
    }

    fn commit_mode(&self) -> CommitMode {
        self.commit_mode
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_csv_extension(&self.input_path)?;
        validate_path("output", &self.output_path)?;
        Ok(())
    }
}
