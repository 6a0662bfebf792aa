// src/specs/listing.rs
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::{IMAGE_CONTAINER, LISTING_CONTAINER};
use crate::core::html::{require_attr, selector};
use crate::error::Result;

static LINKS: LazyLock<Selector> =
    LazyLock::new(|| selector(&format!("{LISTING_CONTAINER} {IMAGE_CONTAINER}")));

/// Detail-page links of every image container, in document order.
/// No container or no matches → empty. An anchor without `href` is an error.
pub fn image_links(html: &str, url: &str) -> Result<Vec<String>> {
    let doc = Html::parse_document(html);
    doc.select(&LINKS)
        .map(|a| require_attr(a, "href", "image container href", url).map(str::to_string))
        .collect()
}
