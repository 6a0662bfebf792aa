// src/specs/mod.rs
//! # Page "specs"
//!
//! One module per imgpile page shape. Each spec encodes *where the data lives
//! in the HTML* and *how to read it*, and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing** over a page body already fetched by someone else.
//! - **Selector choice**: the CSS paths in `config::consts`, scoped the way the
//!   site nests them (pagination list, listing tabs, `div.content-width`).
//! - **Field shaping** for detail pages (metadata split, views/likes lines,
//!   share-panel slots).
//!
//! ## What does **not** live here
//! - **Networking**: `scrape` fetches through `core::net::Fetch`.
//! - **Ordering across pages** and progress reporting (`scrape`).
//! - **Export** (`file`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_images → Fetch::fetch(url)
//!                               ↘ specs::{pagination, listing, detail}::parse
//! ```
//!
//! ## Conventions
//! - Absence that ends a walk (no next link) is `None`, not an error.
//! - Absence of anything a record needs is `ScrapeError::Missing`, naming the
//!   field and the page URL.
//! - Text is returned as the page has it; only the trims the layout needs.
//!
//! Specs are testable **offline** against inline fixtures.
pub mod detail;
pub mod listing;
pub mod pagination;
