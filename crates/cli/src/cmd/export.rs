//! Export command implementation.

use std::io::Write;

use pass2csv_core::config::ResolvedConfig;
use pass2csv_core::export::{Destination, ExportOptions, Exporter, ProgressCallback};
use pass2csv_core::{GpgDecryptor, RecordBuilder};

use crate::ExportArgs;

/// Run the export command.
pub fn run(rc: &ResolvedConfig, args: ExportArgs, verbose: bool) {
    let root = args.path.unwrap_or_else(|| rc.store_root.clone());

    // Command-line patterns extend the configured ones
    let mut patterns = rc.exclude_patterns.clone();
    patterns.extend(args.exclude);

    let builder = match RecordBuilder::with_exclusions(&patterns) {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let binary = args.gpgbinary.unwrap_or_else(|| rc.gpg_binary.clone());
    let decryptor = GpgDecryptor::with_binary(binary).use_agent(args.use_agent || rc.use_agent);

    let options = ExportOptions {
        extension: args.extension.unwrap_or_else(|| rc.extension.clone()),
        parallel: args.parallel || rc.parallel,
    };

    let destination = Destination::parse(args.output.as_deref().unwrap_or(&rc.output));

    // Progress goes to stderr; stdout may be carrying the CSV
    let progress: ProgressCallback = if verbose {
        Box::new(|current, total, path| {
            eprintln!("[{}/{}] {}", current, total, path);
        })
    } else {
        Box::new(|current, total, _path| {
            if current % 50 == 0 || current == total {
                eprint!("\rExporting... {}/{}", current, total);
                std::io::stderr().flush().ok();
            }
        })
    };

    let exporter = Exporter::new(builder, Box::new(decryptor))
        .with_options(options)
        .with_progress(progress);

    match exporter.export(&root, &destination) {
        Ok(summary) => {
            if !verbose {
                eprintln!(); // Newline after progress
            }
            eprintln!("OK   pass2csv export");
            eprintln!("store:    {}", root.display());
            eprintln!("records:  {}", summary.records_written);
            eprintln!("excluded: {}", summary.lines_excluded);
            eprintln!("output:   {}", summary.destination);
        }
        Err(e) => {
            eprintln!("\nError: {}", e);
            eprintln!("No output was written.");
            std::process::exit(1);
        }
    }
}
