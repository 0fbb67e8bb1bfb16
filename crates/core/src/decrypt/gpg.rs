use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use super::{DecryptError, Decryptor, decode_plaintext};

/// Binary used when no override is configured.
pub const DEFAULT_GPG_BINARY: &str = "gpg";

/// Decrypts credential files with the `gpg` command-line tool.
#[derive(Debug, Clone)]
pub struct GpgDecryptor {
    binary: String,
    use_agent: bool,
}

impl GpgDecryptor {
    /// Creates a decryptor using the `gpg` binary from `PATH`.
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_GPG_BINARY)
    }

    /// Creates a decryptor with a custom binary path.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self { binary: binary.into(), use_agent: false }
    }

    /// Ask gpg to use its authentication agent.
    pub fn use_agent(mut self, use_agent: bool) -> Self {
        self.use_agent = use_agent;
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Arguments passed to gpg for `path`; the path is always last.
    pub fn args<'a>(&self, path: &'a Path) -> Vec<&'a OsStr> {
        let mut args = vec![OsStr::new("--quiet"), OsStr::new("--batch"), OsStr::new("--yes")];
        if self.use_agent {
            args.push(OsStr::new("--use-agent"));
        }
        args.push(OsStr::new("--decrypt"));
        args.push(path.as_os_str());
        args
    }
}

impl Default for GpgDecryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl Decryptor for GpgDecryptor {
    fn decrypt(&self, path: &Path) -> Result<String, DecryptError> {
        tracing::debug!(binary = %self.binary, path = %path.display(), "Decrypting");

        let output = Command::new(&self.binary).args(self.args(path)).output().map_err(
            |source| DecryptError::Spawn { binary: self.binary.clone(), source },
        )?;

        if !output.status.success() {
            return Err(DecryptError::Failed {
                path: path.to_path_buf(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(decode_plaintext(output.stdout))
    }
}
