//! CSV output in the Bitwarden import layout.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::parser::ParsedRecord;

/// Mode applied to exported files on Unix; they contain every secret.
pub const PRIVATE_FILE_MODE: u32 = 0o600;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to serialize CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the export goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-` means stdout; anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        if raw == "-" { Destination::Stdout } else { Destination::File(PathBuf::from(raw)) }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Write the header and one row per record.
///
/// The header is written even when there are no records.
pub fn write_records<W: Write>(writer: W, records: &[ParsedRecord]) -> Result<(), csv::Error> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    w.write_record(ParsedRecord::HEADERS)?;
    for record in records {
        w.serialize(record)?;
    }
    w.flush()?;
    Ok(())
}

/// Write `records` to `destination`.
///
/// Files are written to a temporary sibling first and moved into place once
/// complete, so a failed export never leaves a partial file behind.
pub fn write_to(destination: &Destination, records: &[ParsedRecord]) -> Result<(), CsvError> {
    match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            write_records(stdout.lock(), records)?;
            Ok(())
        }
        Destination::File(path) => write_file(path, records),
    }
}

fn write_file(path: &Path, records: &[ParsedRecord]) -> Result<(), CsvError> {
    let io_err = |source: io::Error| CsvError::Io { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    write_records(tmp.as_file_mut(), records)?;
    set_private(tmp.path()).map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

fn set_private(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_FILE_MODE))?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}
