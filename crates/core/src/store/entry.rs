//! A single credential file inside the store.

use std::path::{Component, Path, PathBuf};

/// One credential file and the root it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialEntry {
    base_path: PathBuf,
    path: PathBuf,
}

impl CredentialEntry {
    pub fn new(base_path: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into(), path: path.into() }
    }

    /// Full path of the credential file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Root of the traversal this entry belongs to.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file relative to the store root.
    pub fn relative_path(&self) -> &Path {
        self.path.strip_prefix(&self.base_path).unwrap_or(&self.path)
    }

    /// File name without its last extension.
    pub fn name(&self) -> String {
        self.path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
    }

    /// Containing directory relative to the root, `/`-separated.
    ///
    /// Entries at the root of the store have an empty group.
    pub fn group(&self) -> String {
        self.relative_path()
            .parent()
            .map(|dir| {
                dir.components()
                    .filter_map(|c| match c {
                        Component::Normal(part) => Some(part.to_string_lossy()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_default()
    }
}
