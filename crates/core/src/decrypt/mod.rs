//! Decryption of credential files.
//!
//! The exporter only needs "file in, text out"; [`Decryptor`] is that seam.
//! [`GpgDecryptor`] shells out to GnuPG.

mod gpg;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use gpg::{DEFAULT_GPG_BINARY, GpgDecryptor};

#[derive(Debug, Error)]
pub enum DecryptError {
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("decryption of {path} failed ({status}): {stderr}")]
    Failed { path: PathBuf, status: String, stderr: String },
}

/// Turns one encrypted credential file into its plaintext.
pub trait Decryptor: Send + Sync {
    fn decrypt(&self, path: &Path) -> Result<String, DecryptError>;
}

/// Decode decrypted bytes, falling back to Latin-1 for non UTF-8 payloads.
pub fn decode_plaintext(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_plaintext("pässword\n".as_bytes().to_vec()), "pässword\n");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // "p\xe4ss" is Latin-1 for "päss" and invalid UTF-8.
        assert_eq!(decode_plaintext(vec![b'p', 0xe4, b's', b's']), "päss");
    }
}
