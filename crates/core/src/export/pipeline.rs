//! Export orchestration: walk, decrypt, parse, write.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use thiserror::Error;

use super::csv::{CsvError, Destination, write_to};
use crate::decrypt::{DecryptError, Decryptor};
use crate::parser::{Diagnostics, ParseError, ParsedRecord, RecordBuilder, TracingDiagnostics};
use crate::store::{CredentialEntry, DEFAULT_EXTENSION, StoreError, StoreWalker};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Decrypt(#[from] DecryptError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Write(#[from] CsvError),
}

/// Statistics from an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Number of rows written.
    pub records_written: usize,
    /// Metadata lines dropped by exclusion patterns.
    pub lines_excluded: usize,
    /// Where the rows went.
    pub destination: String,
    /// Export duration in milliseconds.
    pub duration_ms: u64,
}

/// Knobs for an export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Credential file extension, without the dot.
    pub extension: String,
    /// Decrypt and parse entries on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { extension: DEFAULT_EXTENSION.to_string(), parallel: false }
    }
}

/// Progress callback for export operations.
/// Parameters: (current, total, current_path)
pub type ProgressCallback = Box<dyn Fn(usize, usize, &str) + Send + Sync>;

/// Runs the whole store through decryption and parsing.
pub struct Exporter {
    builder: RecordBuilder,
    decryptor: Box<dyn Decryptor>,
    diagnostics: Box<dyn Diagnostics>,
    options: ExportOptions,
    progress: Option<ProgressCallback>,
}

impl Exporter {
    pub fn new(builder: RecordBuilder, decryptor: Box<dyn Decryptor>) -> Self {
        Self {
            builder,
            decryptor,
            diagnostics: Box::new(TracingDiagnostics),
            options: ExportOptions::default(),
            progress: None,
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Box<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Build one record per credential file, in traversal order.
    ///
    /// The first failing entry, in traversal order, aborts the whole run.
    pub fn collect(&self, root: &Path) -> Result<Vec<ParsedRecord>, ExportError> {
        self.collect_with(root, self.diagnostics.as_ref())
    }

    /// Collect every record, then write them all to `destination`.
    pub fn export(
        &self,
        root: &Path,
        destination: &Destination,
    ) -> Result<ExportSummary, ExportError> {
        let start = Instant::now();

        let counting = CountingDiagnostics::new(self.diagnostics.as_ref());
        let records = self.collect_with(root, &counting)?;
        write_to(destination, &records)?;

        let summary = ExportSummary {
            records_written: records.len(),
            lines_excluded: counting.excluded(),
            destination: destination.to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        tracing::info!(
            records = summary.records_written,
            excluded = summary.lines_excluded,
            destination = %summary.destination,
            "Export complete"
        );
        Ok(summary)
    }

    fn collect_with(
        &self,
        root: &Path,
        diag: &dyn Diagnostics,
    ) -> Result<Vec<ParsedRecord>, ExportError> {
        let walker = StoreWalker::with_extension(root, &self.options.extension)?;
        let entries = walker.walk().collect::<Result<Vec<_>, _>>()?;

        let total = entries.len();
        let done = AtomicUsize::new(0);
        let step = |entry: &CredentialEntry| -> Result<ParsedRecord, ExportError> {
            let record = self.process(entry, diag)?;
            if let Some(ref cb) = self.progress {
                let current = done.fetch_add(1, Ordering::Relaxed) + 1;
                cb(current, total, &entry.relative_path().to_string_lossy());
            }
            Ok(record)
        };

        if self.options.parallel {
            // Keep every outcome so the reported error is the first in
            // traversal order, not the first a worker happened to hit.
            let outcomes: Vec<Result<ParsedRecord, ExportError>> =
                entries.par_iter().map(step).collect();
            outcomes.into_iter().collect()
        } else {
            entries.iter().map(step).collect()
        }
    }

    fn process(
        &self,
        entry: &CredentialEntry,
        diag: &dyn Diagnostics,
    ) -> Result<ParsedRecord, ExportError> {
        tracing::info!("Processing {}", entry.path().display());
        let text = self.decryptor.decrypt(entry.path())?;
        Ok(self.builder.build(entry, &text, diag)?)
    }
}

/// Counts excluded lines on the way to the wrapped diagnostics.
struct CountingDiagnostics<'a> {
    inner: &'a dyn Diagnostics,
    excluded: AtomicUsize,
}

impl<'a> CountingDiagnostics<'a> {
    fn new(inner: &'a dyn Diagnostics) -> Self {
        Self { inner, excluded: AtomicUsize::new(0) }
    }

    fn excluded(&self) -> usize {
        self.excluded.load(Ordering::Relaxed)
    }
}

impl Diagnostics for CountingDiagnostics<'_> {
    fn line_excluded(&self, line: &str, pattern: &str) {
        self.excluded.fetch_add(1, Ordering::Relaxed);
        self.inner.line_excluded(line, pattern);
    }

    fn record_parsed(&self, record: &ParsedRecord) {
        self.inner.record_parsed(record);
    }
}
