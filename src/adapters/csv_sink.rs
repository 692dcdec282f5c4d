use crate::core::{OutputRecord, RecordSink};
use crate::utils::error::{Result, ScourgifyError};
use csv::{ErrorKind, WriterBuilder};
use std::io::{self, Write};

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W, delimiter: u8) -> Self {
        // Header is written by hand so that empty inputs still get one.
        let writer = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(inner);
        Self { writer, rows: 0 }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ScourgifyError::IoError(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_header(&mut self) -> Result<()> {
        self.writer
            .write_record(OutputRecord::HEADER)
            .map_err(map_write_error)
    }

    fn write_record(&mut self, record: &OutputRecord) -> Result<()> {
        self.writer.serialize(record).map_err(map_write_error)?;
        self.rows += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// A failing writer is an output problem, not a data problem.
fn map_write_error(err: csv::Error) -> ScourgifyError {
    let io_err = match err.kind() {
        ErrorKind::Io(e) => Some(io::Error::new(e.kind(), e.to_string())),
        _ => None,
    };
    match io_err {
        Some(e) => ScourgifyError::IoError(e),
        None => ScourgifyError::CsvError(err),
    }
}
