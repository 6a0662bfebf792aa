// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::DEFAULT_FILE;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// First album listing page; must carry a scheme.
    pub start_url: String,
    /// Emit "[Info] ..." progress lines.
    pub progress: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator; None for formats that aren't delimited.
    pub fn delim(&self) -> Option<u8> {
        match self {
            ExportFormat::Json => None,
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// None → stdout.
    pub out_path: Option<PathBuf>,
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            out_path: None,
            pretty: true,
        }
    }
}

impl ExportOptions {
    /// Resolve the file to write. A directory (existing, or hinted by a
    /// trailing separator) gets `images.<ext>` appended.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        let p = self.out_path.as_ref()?;
        if p.is_dir() || looks_like_dir_hint(p) {
            Some(p.join(format!("{DEFAULT_FILE}.{}", self.format.ext())))
        } else {
            Some(p.clone())
        }
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
