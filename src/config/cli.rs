use crate::config::{RunConfig, TomlConfig};
use crate::core::CommitMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_arg_count, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "scourgify")]
#[command(about = "Split a roster's \"Last, First\" name column into first and last columns")]
pub struct CliConfig {
    /// Input CSV followed by the output path
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write rows straight to the output instead of committing on success
    #[arg(long)]
    pub streaming: bool,

    /// Validate every row without writing an output file
    #[arg(long)]
    pub dry_run: bool,

    /// Log CPU, memory and timing per phase
    #[arg(long)]
    pub monitor: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Argument gates run first, so a bad invocation never touches the filesystem.
    pub fn resolve(&self) -> Result<RunConfig> {
        self.validate()?;

        let mut config = RunConfig::new(&self.paths[0], &self.paths[1]);
        if let Some(path) = &self.config {
            tracing::debug!("Loading settings from {}", path.display());
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            config = config.apply_toml(&toml)?;
        }

        if self.streaming {
            config.commit_mode = CommitMode::Streaming;
        }
        config.dry_run = self.dry_run;
        config.monitor |= self.monitor;

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_arg_count(self.paths.len())?;
        RunConfig::new(&self.paths[0], &self.paths[1]).validate()
    }
}
