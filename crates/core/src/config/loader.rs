use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use crate::decrypt::DEFAULT_GPG_BINARY;
use crate::store::DEFAULT_EXTENSION;

/// Default export file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "pass.csv";

const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration.
    ///
    /// An explicit `config_path` must exist. When no path is given and the
    /// default file is absent, built-in defaults are used.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = default_config_path();
                if !p.exists() {
                    return Self::defaults(profile_override);
                }
                p
            }
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        let mut resolved = Self::resolve_profile(&active, prof, &cf.logging)?;
        resolved.source = Some(path);
        Ok(resolved)
    }

    /// Configuration used when no config file exists.
    pub fn defaults(profile_override: Option<&str>) -> Result<ResolvedConfig, ConfigError> {
        match profile_override {
            Some(name) if name != DEFAULT_PROFILE => {
                Err(ConfigError::ProfileNotFound(name.to_string()))
            }
            _ => Self::resolve_profile(
                DEFAULT_PROFILE,
                &Profile::default(),
                &LoggingConfig::default(),
            ),
        }
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let store_root = match &prof.store_root {
            Some(root) => expand_path(root)?,
            None => default_store_root(),
        };

        // Resolve log file path if present
        let logging = if let Some(ref file) = log_cfg.file {
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            source: None,
            store_root,
            gpg_binary: prof
                .gpg_binary
                .clone()
                .unwrap_or_else(|| DEFAULT_GPG_BINARY.to_string()),
            use_agent: prof.use_agent,
            extension: prof.extension.clone().unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            output: prof.output.clone().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            exclude_patterns: prof.exclude_patterns.clone(),
            parallel: prof.parallel,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("pass2csv").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("pass2csv").join("config.toml")
}

/// Store location used by `pass` itself: `$PASSWORD_STORE_DIR`, else `~/.password-store`.
pub fn default_store_root() -> PathBuf {
    if let Ok(dir) = env::var("PASSWORD_STORE_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".password-store")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
