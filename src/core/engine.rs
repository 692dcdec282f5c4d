use crate::adapters::{CsvSink, CsvSource, OutputFile};
use crate::core::transform::transform;
use crate::core::{CommitMode, ConfigProvider, RecordSink, TransformSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io;

pub struct ScourgifyEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ScourgifyEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// One read-transform-write pass. The input is opened before the output,
    /// so an unreadable input never creates or truncates the destination.
    pub fn run(&self) -> Result<TransformSummary> {
        let mut monitor = SystemMonitor::new(self.config.monitoring_enabled());

        // Extract
        let input_path = self.config.input_path();
        tracing::info!("📥 Reading {}", input_path.display());
        let mut source = CsvSource::open(input_path, self.config.input_delimiter())?;
        monitor.log_stats("Extract");

        if self.config.dry_run() {
            tracing::info!("🔍 Dry run: validating rows without writing output");
            let mut sink = CsvSink::new(io::sink(), self.config.output_delimiter());
            let rows_written = transform(&mut source, &mut sink)?;
            monitor.log_final_stats();
            return Ok(TransformSummary {
                rows_written,
                destination: None,
                dry_run: true,
            });
        }

        // Transform
        let mode = self.config.commit_mode();
        let output = OutputFile::create(self.config.output_path(), mode)?;
        tracing::debug!(
            "Writing {} ({:?} commit)",
            output.destination().display(),
            mode
        );
        let mut sink = CsvSink::new(output, self.config.output_delimiter());

        let rows_written = match transform(&mut source, &mut sink) {
            Ok(rows) => rows,
            Err(e) => {
                if mode == CommitMode::Streaming {
                    if let Err(flush_err) = sink.flush() {
                        tracing::warn!("⚠️ Could not flush partial output: {}", flush_err);
                    }
                    tracing::warn!(
                        "⚠️ {} rows left in {} before the failure",
                        sink.rows(),
                        self.config.output_path().display()
                    );
                }
                return Err(e);
            }
        };
        monitor.log_stats("Transform");

        // Load
        let destination = sink.finish()?.commit()?;
        tracing::info!(
            "📁 Wrote {} records to {}",
            rows_written,
            destination.display()
        );
        monitor.log_stats("Load");
        monitor.log_final_stats();

        Ok(TransformSummary {
            rows_written,
            destination: Some(destination),
            dry_run: false,
        })
    }
}
