//! Core library for pass2csv.
//!
//! Converts a `pass` password store into a CSV file that password managers
//! such as Bitwarden can import.

pub mod config;
pub mod decrypt;
pub mod export;
pub mod parser;
pub mod store;

pub use decrypt::{DecryptError, Decryptor, GpgDecryptor};
pub use export::{Destination, ExportError, ExportOptions, ExportSummary, Exporter};
pub use parser::{ParseError, ParsedRecord, RecordBuilder};
pub use store::{CredentialEntry, StoreWalker};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
