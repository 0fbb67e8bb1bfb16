//! Record assembly.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::diagnostics::Diagnostics;
use super::exclusion::ExclusionFilter;
use super::extractor::{ExtractedFields, FieldExtractor};
use super::rules::PatternError;
use crate::store::CredentialEntry;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("the password file is empty: {0}")]
    EmptyContent(PathBuf),
}

/// One exported login, in the column order of the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    pub folder: String,
    pub favorite: u8,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub notes: String,
    pub fields: String,
    pub login_uri: String,
    pub login_username: String,
    pub login_password: String,
    pub login_totp: String,
}

impl ParsedRecord {
    /// Column names, in serialization order.
    pub const HEADERS: [&'static str; 10] = [
        "folder",
        "favorite",
        "type",
        "name",
        "notes",
        "fields",
        "login_uri",
        "login_username",
        "login_password",
        "login_totp",
    ];

    fn login(entry: &CredentialEntry, secret: &str, extracted: ExtractedFields) -> Self {
        Self {
            folder: entry.group(),
            favorite: 0,
            kind: "login".to_string(),
            name: entry.name(),
            notes: String::new(),
            fields: extracted.fields,
            login_uri: extracted.url,
            login_username: extracted.username,
            login_password: secret.to_string(),
            login_totp: String::new(),
        }
    }
}

/// Turns decrypted credential text into a [`ParsedRecord`].
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    filter: ExclusionFilter,
    extractor: FieldExtractor,
}

impl RecordBuilder {
    pub fn new(filter: ExclusionFilter) -> Self {
        Self { filter, extractor: FieldExtractor::new() }
    }

    /// Builder with the default patterns plus `extra` exclusions.
    pub fn with_exclusions<S: AsRef<str>>(extra: &[S]) -> Result<Self, PatternError> {
        Ok(Self::new(ExclusionFilter::with_patterns(extra)?))
    }

    pub fn filter(&self) -> &ExclusionFilter {
        &self.filter
    }

    /// Parse the decrypted text of the entry at `path` under `base_path`.
    pub fn parse(
        &self,
        base_path: &Path,
        path: &Path,
        text: &str,
        diag: &dyn Diagnostics,
    ) -> Result<ParsedRecord, ParseError> {
        self.build(&CredentialEntry::new(base_path, path), text, diag)
    }

    /// Build the record for `entry` from its decrypted text.
    ///
    /// The first line is the secret; everything after it is metadata.
    pub fn build(
        &self,
        entry: &CredentialEntry,
        text: &str,
        diag: &dyn Diagnostics,
    ) -> Result<ParsedRecord, ParseError> {
        if text.is_empty() {
            return Err(ParseError::EmptyContent(entry.path().to_path_buf()));
        }

        let (secret, metadata) = text.split_once('\n').unwrap_or((text, ""));

        let kept = self.filter.filter(metadata.split('\n'), diag);
        let extracted = self.extractor.extract(kept);

        let record = ParsedRecord::login(entry, secret, extracted);
        diag.record_parsed(&record);
        Ok(record)
    }
}
