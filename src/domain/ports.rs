use crate::domain::model::{OutputRecord, SourceRecord};
use crate::utils::error::Result;
use std::path::Path;

pub trait RecordSource {
    /// `None` once the input is exhausted.
    fn next_record(&mut self) -> Option<Result<SourceRecord>>;
}

pub trait RecordSink {
    fn write_header(&mut self) -> Result<()>;
    fn write_record(&mut self, record: &OutputRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitMode {
    /// Write to a temporary file and rename over the destination on success.
    #[default]
    Atomic,
    /// Truncate the destination up front and write rows as they are mapped.
    Streaming,
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn input_delimiter(&self) -> u8;
    fn output_delimiter(&self) -> u8;
    fn commit_mode(&self) -> CommitMode;
    fn dry_run(&self) -> bool;
    fn monitoring_enabled(&self) -> bool;
}
