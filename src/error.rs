// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Relative or scheme-less URL. Traversal treats this as "no more pages".
    #[error("no URL scheme supplied: {0}")]
    MissingScheme(String),

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// Expected element or attribute absent from a page.
    #[error("{what} not found on {url}")]
    Missing { what: &'static str, url: String },

    /// Download button title not shaped like `W x H - TYPE NUM UNIT`.
    #[error("unexpected image metadata {title:?} on {url}")]
    Metadata { title: String, url: String },

    /// Global log subscriber could not be installed for `target`.
    #[error("cannot log to {target}: {reason}")]
    LogInit { target: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    pub(crate) fn missing(what: &'static str, url: &str) -> Self {
        Self::Missing { what, url: url.to_string() }
    }

    pub fn is_missing_scheme(&self) -> bool {
        matches!(self, Self::MissingScheme(_))
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
