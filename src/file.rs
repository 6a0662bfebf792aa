// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::data::ImageRecord;
use crate::error::{Result, ScrapeError};

/// Write records per `export`: to the resolved file, or stdout when no path.
/// Returns the path written to, if any.
pub fn export_records(export: &ExportOptions, records: &[ImageRecord]) -> Result<Option<PathBuf>> {
    match export.resolved_path() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let mut out = BufWriter::new(File::create(&path)?); // truncate/overwrite
            write_records(&mut out, export, records)?;
            out.flush()?;
            Ok(Some(path))
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_records(&mut out, export, records)?;
            out.flush()?;
            Ok(None)
        }
    }
}

/// Serialize records into any writer in the configured format.
pub fn write_records<W: Write>(
    mut w: W,
    export: &ExportOptions,
    records: &[ImageRecord],
) -> Result<()> {
    match export.format.delim() {
        None => {
            if export.pretty {
                serde_json::to_writer_pretty(&mut w, records)?;
            } else {
                serde_json::to_writer(&mut w, records)?;
            }
            writeln!(w)?;
        }
        Some(sep) => {
            let mut wtr = csv::WriterBuilder::new().delimiter(sep).from_writer(w);
            // serde writes the header row from the field names
            if records.is_empty() {
                wtr.write_record(ImageRecord::HEADERS)?;
            }
            for r in records {
                wtr.serialize(r)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Export to a string (tests, copy-to-clipboard style callers).
pub fn to_export_string(format: ExportFormat, records: &[ImageRecord]) -> Result<String> {
    let export = ExportOptions { format, ..ExportOptions::default() };
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, &export, records)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
