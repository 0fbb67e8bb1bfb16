//! Credential text parsing.
//!
//! Decrypted credential text goes through three stages:
//! - [`RecordBuilder`] splits off the secret line
//! - [`ExclusionFilter`] drops noise lines from the metadata
//! - [`FieldExtractor`] picks out labeled username and url lines
//!
//! Everything the extractor does not consume ends up in the record's
//! free-text `fields` column.

pub mod diagnostics;
pub mod exclusion;
pub mod extractor;
pub mod record;
pub mod rules;

pub use diagnostics::{Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use exclusion::ExclusionFilter;
pub use extractor::{ExtractedFields, FieldExtractor};
pub use record::{ParseError, ParsedRecord, RecordBuilder};
pub use rules::{DEFAULT_EXCLUDE_PATTERNS, LineAction, MatcherRule, PatternError};
