pub mod doctor;
pub mod export;
pub mod inspect;

use std::path::Path;

use pass2csv_core::config::{ConfigLoader, ResolvedConfig};

/// Load configuration or exit with an error message.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    }
}
