use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One roster row as read from the input. Extra input columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputRecord {
    /// "Last, First"
    pub name: String,
    pub house: String,
}

/// Field order here is the serialized column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub first: String,
    pub last: String,
    pub house: String,
}

impl OutputRecord {
    pub const HEADER: [&'static str; 3] = ["first", "last", "house"];
}

/// An input record paired with the 1-based line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub line: u64,
    pub record: InputRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformSummary {
    pub rows_written: usize,
    pub destination: Option<PathBuf>,
    pub dry_run: bool,
}
