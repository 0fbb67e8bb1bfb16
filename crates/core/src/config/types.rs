use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct Profile {
    /// Password store to export (defaults to `$PASSWORD_STORE_DIR` or `~/.password-store`).
    pub store_root: Option<String>,
    /// Optional override for the gpg binary location.
    pub gpg_binary: Option<String>,
    #[serde(default)]
    pub use_agent: bool,
    /// Credential file extension (defaults to `gpg`).
    pub extension: Option<String>,
    /// Output path, or `-` for stdout.
    pub output: Option<String>,
    /// Regexes for metadata lines to drop, on top of the built-in ones.
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Config file the values came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub store_root: PathBuf,
    pub gpg_binary: String,
    pub use_agent: bool,
    pub extension: String,
    pub output: String,
    pub exclude_patterns: Vec<String>,
    pub parallel: bool,
    pub logging: LoggingConfig,
}
