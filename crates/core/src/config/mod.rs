//! Configuration file loading.
//!
//! The config file is optional; every value has a built-in default and the
//! command line overrides what the active profile sets.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, DEFAULT_OUTPUT, default_config_path};
pub use types::{LoggingConfig, Profile, ResolvedConfig};
