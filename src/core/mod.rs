pub mod engine;
pub mod transform;

pub use crate::domain::model::{
    InputRecord, OutputRecord, SourceRecord, TransformSummary,
};
pub use crate::domain::ports::{CommitMode, ConfigProvider, RecordSink, RecordSource};
pub use crate::utils::error::Result;
