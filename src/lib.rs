pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{RunConfig, TomlConfig};
pub use crate::core::{engine::ScourgifyEngine, transform::transform};
pub use crate::domain::model::{InputRecord, OutputRecord, TransformSummary};
pub use crate::domain::ports::CommitMode;
pub use crate::utils::error::{Result, ScourgifyError};
