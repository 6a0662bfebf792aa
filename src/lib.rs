// src/lib.rs

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod specs;

pub use crate::core::net::{Fetch, HttpFetcher};
pub use data::ImageRecord;
pub use error::{Result, ScrapeError};
pub use progress::{NullProgress, Progress, WriterProgress};
pub use scrape::{collect_images, extract_image_data, extract_image_links, extract_pages};
