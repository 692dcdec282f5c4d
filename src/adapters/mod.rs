// Adapters layer: CSV codecs and the filesystem output behind the domain ports.

pub mod csv_sink;
pub mod csv_source;
pub mod output_file;

pub use csv_sink::CsvSink;
pub use csv_source::CsvSource;
pub use output_file::OutputFile;
