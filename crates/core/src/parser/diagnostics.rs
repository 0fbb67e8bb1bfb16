//! Diagnostics context handed to the parser.
//!
//! Diagnostics are observational only; they never change parse results.

use super::record::ParsedRecord;

/// Receives parser events worth tracing.
pub trait Diagnostics: Send + Sync {
    /// A metadata line was dropped by an exclusion pattern.
    fn line_excluded(&self, line: &str, pattern: &str);

    /// A record was assembled.
    fn record_parsed(&self, record: &ParsedRecord);
}

/// Forwards parser events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn line_excluded(&self, line: &str, pattern: &str) {
        tracing::debug!(pattern, "Skip line {}", line);
    }

    fn record_parsed(&self, record: &ParsedRecord) {
        // Never log the secret or the free-text fields.
        tracing::debug!(
            name = %record.name,
            folder = %record.folder,
            has_username = !record.login_username.is_empty(),
            has_uri = !record.login_uri.is_empty(),
            "Parsed record"
        );
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn line_excluded(&self, _line: &str, _pattern: &str) {}

    fn record_parsed(&self, _record: &ParsedRecord) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Captures events for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingDiagnostics {
        pub excluded: Mutex<Vec<(String, String)>>,
        pub parsed: Mutex<Vec<String>>,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn line_excluded(&self, line: &str, pattern: &str) {
            self.excluded.lock().unwrap().push((line.to_string(), pattern.to_string()));
        }

        fn record_parsed(&self, record: &ParsedRecord) {
            self.parsed.lock().unwrap().push(record.name.clone());
        }
    }
}
