use std::path::Path;

use pass2csv_core::config::{ConfigLoader, default_config_path};
use pass2csv_core::parser::ExclusionFilter;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let result = ConfigLoader::load(config, profile).map(|rc| {
        // Surface bad exclusion patterns here rather than at export time
        let filter = ExclusionFilter::with_patterns(&rc.exclude_patterns);
        (rc, filter)
    });

    match result {
        Ok((rc, Ok(filter))) => {
            println!("OK   pass2csv doctor");
            println!(
                "path: {}",
                rc.source.as_ref().map_or_else(
                    || format!("(defaults) {}", default_config_path().display()),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("store_root: {}", rc.store_root.display());
            println!("gpg_binary: {}", rc.gpg_binary);
            println!("use_agent: {}", rc.use_agent);
            println!("extension: {}", rc.extension);
            println!("output: {}", rc.output);
            println!("parallel: {}", rc.parallel);
            println!("exclude: {}", filter.patterns().join(" | "));
            println!("logging.level: {}", rc.logging.level);
        }
        Ok((_, Err(e))) => {
            println!("FAIL pass2csv doctor");
            println!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            println!("FAIL pass2csv doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
