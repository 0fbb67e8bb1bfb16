//! Inspect command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use pass2csv_core::config::ResolvedConfig;
use pass2csv_core::decrypt::decode_plaintext;
use pass2csv_core::parser::TracingDiagnostics;
use pass2csv_core::RecordBuilder;

use crate::InspectArgs;

/// Run the inspect command.
pub fn run(rc: &ResolvedConfig, args: InspectArgs) {
    let mut patterns = rc.exclude_patterns.clone();
    patterns.extend(args.exclude);

    let builder = match RecordBuilder::with_exclusions(&patterns) {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let text = match read_input(args.file.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    let entry = entry_path(args.entry, args.file.as_deref());
    let record = match builder.parse(Path::new(""), &entry, &text, &TracingDiagnostics) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&record) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize record: {e}");
            std::process::exit(1);
        }
    }
}

/// Read decrypted text, decoded the same way as gpg output.
fn read_input(file: Option<&Path>) -> std::io::Result<String> {
    let bytes = match file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(decode_plaintext(bytes))
}

/// The entry path used for name and folder: `--entry`, else the input file
/// name, else `stdin`.
fn entry_path(entry: Option<PathBuf>, file: Option<&Path>) -> PathBuf {
    entry
        .or_else(|| file.and_then(Path::file_name).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("stdin"))
}
