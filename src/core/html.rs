// src/core/html.rs
//
// Thin helpers over `scraper`. Selectors are compile-time constants, so a
// parse failure is a programming error and is reported once at first use.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// All text nodes under `el`, concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First match anywhere in the document.
pub fn first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

/// Like `first`, but absence is a structural error naming `what`.
pub fn require<'a>(
    doc: &'a Html,
    sel: &Selector,
    what: &'static str,
    url: &str,
) -> Result<ElementRef<'a>> {
    first(doc, sel).ok_or_else(|| ScrapeError::missing(what, url))
}

/// Same as `require`, searching under an element.
pub fn require_in<'a>(
    el: ElementRef<'a>,
    sel: &Selector,
    what: &'static str,
    url: &str,
) -> Result<ElementRef<'a>> {
    el.select(sel).next().ok_or_else(|| ScrapeError::missing(what, url))
}

pub fn require_attr<'a>(
    el: ElementRef<'a>,
    attr: &str,
    what: &'static str,
    url: &str,
) -> Result<&'a str> {
    el.value().attr(attr).ok_or_else(|| ScrapeError::missing(what, url))
}
