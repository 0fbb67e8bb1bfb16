//! Recursive password-store walker.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::entry::CredentialEntry;

/// Extension of encrypted credential files.
pub const DEFAULT_EXTENSION: &str = "gpg";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("password store root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk password store {0}: {1}")]
    Walk(String, #[source] walkdir::Error),
}

/// Walker for discovering credential files in a password store.
#[derive(Debug, Clone)]
pub struct StoreWalker {
    root: PathBuf,
    extension: String,
}

impl StoreWalker {
    /// Create a walker for `.gpg` files under `root`.
    pub fn new(root: &Path) -> Result<Self, StoreError> {
        Self::with_extension(root, DEFAULT_EXTENSION)
    }

    /// Create a walker for a custom credential extension.
    ///
    /// A leading dot is accepted (`".gpg"` and `"gpg"` are equivalent).
    pub fn with_extension(root: &Path, extension: &str) -> Result<Self, StoreError> {
        let root = root
            .canonicalize()
            .map_err(|_| StoreError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(StoreError::MissingRoot(root.display().to_string()));
        }

        Ok(Self { root, extension: extension.trim_start_matches('.').to_string() })
    }

    /// Lazily walk the store in file-name order.
    ///
    /// Version-control directories are skipped and only files carrying the
    /// configured extension are yielded.
    pub fn walk(&self) -> impl Iterator<Item = Result<CredentialEntry, StoreError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_excluded(e))
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    (entry.file_type().is_file() && self.is_credential(path))
                        .then(|| Ok(CredentialEntry::new(&self.root, path)))
                }
                Err(e) => Some(Err(StoreError::Walk(self.root.display().to_string(), e))),
            })
    }

    /// Get the store root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn is_credential(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == self.extension)
    }
}

fn is_excluded(entry: &walkdir::DirEntry) -> bool {
    // Never filter the root directory (depth 0)
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    matches!(entry.file_name().to_str(), Some(".git" | ".hg" | ".svn"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("bank.gpg"), "x").unwrap();
        fs::write(root.join(".gpg-id"), "ABCDEF").unwrap();

        fs::create_dir_all(root.join("work/mail")).unwrap();
        fs::write(root.join("work/vpn.gpg"), "x").unwrap();
        fs::write(root.join("work/mail/imap.gpg"), "x").unwrap();

        // Version control metadata (should be skipped)
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join(".git/objects/leak.gpg"), "x").unwrap();

        // Other extensions (should be skipped)
        fs::write(root.join("readme.txt"), "x").unwrap();
        fs::write(root.join("work/key.asc"), "x").unwrap();

        dir
    }

    fn relative_paths(walker: &StoreWalker) -> Vec<String> {
        walker
            .walk()
            .map(|e| e.unwrap().relative_path().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_walk_finds_credentials_in_order() {
        let store = create_test_store();
        let walker = StoreWalker::new(store.path()).unwrap();

        assert_eq!(
            relative_paths(&walker),
            vec!["bank.gpg", "work/mail/imap.gpg", "work/vpn.gpg"]
        );
    }

    #[test]
    fn test_walk_skips_git_directory() {
        let store = create_test_store();
        let walker = StoreWalker::new(store.path()).unwrap();

        assert!(!relative_paths(&walker).iter().any(|p| p.contains(".git")));
    }

    #[test]
    fn test_hidden_non_vcs_directories_are_walked() {
        let store = create_test_store();
        fs::create_dir_all(store.path().join(".hidden")).unwrap();
        fs::write(store.path().join(".hidden/token.gpg"), "x").unwrap();

        let walker = StoreWalker::new(store.path()).unwrap();
        assert!(relative_paths(&walker).contains(&".hidden/token.gpg".to_string()));
    }

    #[test]
    fn test_custom_extension() {
        let store = create_test_store();
        let walker = StoreWalker::with_extension(store.path(), ".asc").unwrap();

        assert_eq!(walker.extension(), "asc");
        assert_eq!(relative_paths(&walker), vec!["work/key.asc"]);
    }

    #[test]
    fn test_entries_carry_store_root() {
        let store = create_test_store();
        let walker = StoreWalker::new(store.path()).unwrap();
        let entry = walker.walk().nth(1).unwrap().unwrap();

        assert_eq!(entry.base_path(), walker.root());
        assert_eq!(entry.name(), "imap");
        assert_eq!(entry.group(), "work/mail");
    }

    #[test]
    fn test_missing_root() {
        let result = StoreWalker::new(Path::new("/nonexistent/password-store"));
        assert!(matches!(result.unwrap_err(), StoreError::MissingRoot(_)));
    }

    #[test]
    fn test_root_must_be_directory() {
        let store = create_test_store();
        let result = StoreWalker::new(&store.path().join("bank.gpg"));
        assert!(matches!(result.unwrap_err(), StoreError::MissingRoot(_)));
    }

    #[test]
    fn test_empty_store() {
        let dir = TempDir::new().unwrap();
        let walker = StoreWalker::new(dir.path()).unwrap();
        assert_eq!(walker.walk().count(), 0);
    }
}
