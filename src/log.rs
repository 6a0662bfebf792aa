// src/log.rs
//
// Tracing subscriber setup for the binary. Library code only emits events.
// Lines carry time since start, e.g. `0.153s  INFO page extracted ...`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, fmt::time::uptime};

use crate::config::consts::DEFAULT_LOG_FILE;
use crate::error::{Result, ScrapeError};
use crate::file::ensure_directory;

pub fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

/// `verbosity`: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity`.
/// With `file`, events are appended there instead of stderr.
/// A second stderr call is a no-op; a second call with `file` is an error
/// and leaves the file untouched.
pub fn init(verbosity: u8, file: Option<&Path>) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return match file {
            Some(path) => Err(ScrapeError::LogInit {
                target: path.display().to_string(),
                reason: "a log subscriber is already installed".into(),
            }),
            None => Ok(()),
        };
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("imgpile_scrape={}", level_for(verbosity))));

    let builder = fmt().with_env_filter(filter).with_timer(uptime()).with_target(false);

    let target = file.map_or_else(|| "stderr".to_string(), |p| p.display().to_string());
    let installed = match file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let f = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(f)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| ScrapeError::LogInit { target, reason: e.to_string() })
}
