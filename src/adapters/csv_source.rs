use crate::core::{InputRecord, RecordSource, SourceRecord};
use crate::utils::error::{Result, ScourgifyError};
use csv::{ErrorKind, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 2] = ["name", "house"];

pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
    /// Named in `SourceNotFound` when the underlying reader fails.
    origin: String,
}

impl CsvSource<File> {
    /// Opening, and every later read, reports I/O failures as an unreadable source.
    pub fn open(path: &Path, delimiter: u8) -> Result<Self> {
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| ScourgifyError::SourceNotFound {
            path: origin.clone(),
            source,
        })?;
        Self::with_origin(file, delimiter, origin)
    }
}

impl<R: Read> CsvSource<R> {
    /// Reads the header row up front and rejects inputs without `name` and `house`.
    pub fn new(inner: R, delimiter: u8) -> Result<Self> {
        Self::with_origin(inner, delimiter, "input".to_string())
    }

    fn with_origin(inner: R, delimiter: u8, origin: String) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(inner);

        let headers = reader
            .headers()
            .map_err(|e| map_csv_error(e, &origin))?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ScourgifyError::malformed(
                    1,
                    format!("header is missing the '{}' column", column),
                ));
            }
        }
        tracing::debug!("Input columns: {:?}", headers);

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            origin,
        })
    }
}

impl<R: Read> RecordSource for CsvSource<R> {
    fn next_record(&mut self) -> Option<Result<SourceRecord>> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map(|p| p.line()).unwrap_or(0);
                let parsed = self
                    .record
                    .deserialize::<InputRecord>(Some(&self.headers))
                    .map(|record| SourceRecord { line, record })
                    .map_err(|e| ScourgifyError::malformed(line, e.to_string()));
                Some(parsed)
            }
            Err(e) => Some(Err(map_csv_error(e, &self.origin))),
        }
    }
}

fn map_csv_error(err: csv::Error, origin: &str) -> ScourgifyError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let mapped = match err.kind() {
        ErrorKind::Io(io_err) => Some(ScourgifyError::SourceNotFound {
            path: origin.to_string(),
            source: io::Error::new(io_err.kind(), io_err.to_string()),
        }),
        ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => Some(ScourgifyError::malformed(
            line,
            format!("expected {} fields, found {}", expected_len, len),
        )),
        ErrorKind::Utf8 { .. } => Some(ScourgifyError::malformed(line, "row is not valid UTF-8")),
        _ => None,
    };
    mapped.unwrap_or(ScourgifyError::CsvError(err))
}
