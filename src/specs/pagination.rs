// src/specs/pagination.rs
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::{PAGINATION, PAGINATION_NEXT};
use crate::core::html::selector;

static NEXT: LazyLock<Selector> =
    LazyLock::new(|| selector(&format!("{PAGINATION} {PAGINATION_NEXT}")));

/// `href` of the "next" link in the visible pagination list.
/// None when the list, the link, or a non-empty href is missing.
pub fn next_page(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let href = doc.select(&NEXT).next()?.value().attr("href")?;
    (!href.is_empty()).then(|| href.to_string())
}
