//! Store export: the full walk → decrypt → parse → CSV pipeline.

pub mod csv;
pub mod pipeline;

pub use self::csv::{CsvError, Destination, write_records, write_to};
pub use pipeline::{ExportError, ExportOptions, ExportSummary, Exporter, ProgressCallback};
