//! Password store discovery.
//!
//! A password store is a directory tree holding one encrypted file per
//! credential. This module walks the tree and describes each credential file.

pub mod entry;
pub mod walker;

pub use entry::CredentialEntry;
pub use walker::{DEFAULT_EXTENSION, StoreError, StoreWalker};
