use crate::core::{OutputRecord, RecordSink, RecordSource, SourceRecord};
use crate::utils::error::{Result, ScourgifyError};

pub const NAME_SEPARATOR: &str = ", ";

/// Splits "Last, First" into `(last, first)`.
///
/// Returns `None` unless the separator occurs exactly once and both sides
/// are non-empty, so "Jane Doe" and "Doe, Jane, Q" are both rejected.
pub fn split_name(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split(NAME_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(last), Some(first), None) if !last.is_empty() && !first.is_empty() => {
            Some((last, first))
        }
        _ => None,
    }
}

pub fn map_record(source: SourceRecord) -> Result<OutputRecord> {
    let SourceRecord { line, record } = source;

    let (last, first) = split_name(&record.name).ok_or_else(|| {
        ScourgifyError::malformed(
            line,
            format!(
                "name '{}' is not of the form \"Last, First\"",
                record.name
            ),
        )
    })?;

    Ok(OutputRecord {
        first: first.to_string(),
        last: last.to_string(),
        house: record.house,
    })
}

/// Writes the fixed header, then one mapped row per source row, in order.
///
/// Stops at the first failing row. Rows the sink already accepted stay there
/// until the caller commits or discards the sink.
pub fn transform<S, K>(source: &mut S, sink: &mut K) -> Result<usize>
where
    S: RecordSource + ?Sized,
    K: RecordSink + ?Sized,
{
    sink.write_header()?;

    let mut rows = 0;
    while let Some(next) = source.next_record() {
        let output = map_record(next?)?;
        sink.write_record(&output)?;
        rows += 1;
    }

    sink.flush()?;
    tracing::debug!("Transformed {} records", rows);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputRecord;
    use std::collections::VecDeque;

    struct MockSource {
        rows: VecDeque<Result<SourceRecord>>,
    }

    impl MockSource {
        fn new(names: &[(&str, &str)]) -> Self {
            let rows = names
                .iter()
                .enumerate()
                .map(|(i, (name, house))| {
                    Ok(SourceRecord {
                        line: i as u64 + 2,
                        record: InputRecord {
                            name: name.to_string(),
                            house: house.to_string(),
                        },
                    })
                })
                .collect();
            Self { rows }
        }
    }

    impl RecordSource for MockSource {
        fn next_record(&mut self) -> Option<Result<SourceRecord>> {
            self.rows.pop_front()
        }
    }

    #[derive(Default)]
    struct MockSink {
        header_written: bool,
        records: Vec<OutputRecord>,
        flushed: bool,
    }

    impl RecordSink for MockSink {
        fn write_header(&mut self) -> Result<()> {
            self.header_written = true;
            Ok(())
        }

        fn write_record(&mut self, record: &OutputRecord) -> Result<()> {
            self.records.push(record.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("Doe, Jane"), Some(("Doe", "Jane")));
        assert_eq!(split_name("Weasley, Ron"), Some(("Weasley", "Ron")));
        assert_eq!(split_name("Jane Doe"), None);
        assert_eq!(split_name("Doe, Jane, Q"), None);
        assert_eq!(split_name("Doe,Jane"), None);
        assert_eq!(split_name(", Jane"), None);
        assert_eq!(split_name("Doe, "), None);
        assert_eq!(split_name(""), None);
    }

    #[test]
    fn test_map_record_field_mapping() {
        let output = map_record(SourceRecord {
            line: 2,
            record: InputRecord {
                name: "Doe, Jane".to_string(),
                house: "Gryffindor".to_string(),
            },
        })
        .unwrap();

        assert_eq!(
            output,
            OutputRecord {
                first: "Jane".to_string(),
                last: "Doe".to_string(),
                house: "Gryffindor".to_string(),
            }
        );
    }

    #[test]
    fn test_map_record_reports_line() {
        let err = map_record(SourceRecord {
            line: 7,
            record: InputRecord {
                name: "Jane Doe".to_string(),
                house: "Hufflepuff".to_string(),
            },
        })
        .unwrap_err();

        match err {
            ScourgifyError::MalformedRecord { line, reason } => {
                assert_eq!(line, 7);
                assert!(reason.contains("Jane Doe"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_transform_preserves_order_and_count() {
        let mut source = MockSource::new(&[
            ("Abbott, Hannah", "Hufflepuff"),
            ("Bones, Susan", "Hufflepuff"),
            ("Boot, Terry", "Ravenclaw"),
        ]);
        let mut sink = MockSink::default();

        let rows = transform(&mut source, &mut sink).unwrap();

        assert_eq!(rows, 3);
        assert!(sink.header_written);
        assert!(sink.flushed);
        let lasts: Vec<&str> = sink.records.iter().map(|r| r.last.as_str()).collect();
        assert_eq!(lasts, vec!["Abbott", "Bones", "Boot"]);
    }

    #[test]
    fn test_transform_writes_header_for_empty_input() {
        let mut source = MockSource::new(&[]);
        let mut sink = MockSink::default();

        assert_eq!(transform(&mut source, &mut sink).unwrap(), 0);
        assert!(sink.header_written);
        assert!(sink.records.is_empty());
    }

    #[test]
    fn test_transform_stops_at_first_malformed_row() {
        let mut source = MockSource::new(&[
            ("Abbott, Hannah", "Hufflepuff"),
            ("Doe, Jane, Q", "Slytherin"),
            ("Boot, Terry", "Ravenclaw"),
        ]);
        let mut sink = MockSink::default();

        let err = transform(&mut source, &mut sink).unwrap_err();

        assert!(matches!(err, ScourgifyError::MalformedRecord { line: 3, .. }));
        assert_eq!(sink.records.len(), 1);
        assert!(!sink.flushed);
    }

    #[test]
    fn test_transform_propagates_source_errors() {
        let mut source = MockSource {
            rows: VecDeque::from(vec![Err(ScourgifyError::malformed(
                2,
                "missing field `house`",
            ))]),
        };
        let mut sink = MockSink::default();

        assert!(matches!(
            transform(&mut source, &mut sink),
            Err(ScourgifyError::MalformedRecord { line: 2, .. })
        ));
    }
}
