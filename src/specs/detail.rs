// src/specs/detail.rs
//
// Single image page → ImageRecord.
// Everything is read from inside `div.content-width` blocks.
//
// Download button title: "5232 x 7845 - JPG 32.2 MB"
//                         └resolution┘   └type┘└size┘
// Views/likes block text: "1,234 views\n   56 likes"

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use crate::config::consts::*;
use crate::core::html::{require, require_attr, require_in, selector, text_of};
use crate::data::{ImageRecord, extension_for};
use crate::error::{Result, ScrapeError};

fn scoped(css: &str) -> Selector {
    selector(&format!("{CONTENT_BLOCK} {css}"))
}

static TITLE: LazyLock<Selector> = LazyLock::new(|| scoped(VIEWER_TITLE));
static UPLOADER_SEL: LazyLock<Selector> = LazyLock::new(|| scoped(UPLOADER));
static DOWNLOAD: LazyLock<Selector> = LazyLock::new(|| scoped(DOWNLOAD_BUTTON));
static COUNTS: LazyLock<Selector> = LazyLock::new(|| scoped(VIEWS_LIKES));
static SHARE: LazyLock<Selector> = LazyLock::new(|| scoped(SHARE_ITEM));
static LABEL: LazyLock<Selector> = LazyLock::new(|| selector(SHARE_LABEL));
static INPUT: LazyLock<Selector> = LazyLock::new(|| selector(SHARE_INPUT));
static META: LazyLock<Selector> = LazyLock::new(|| scoped(UPLOADED_META));
static SPAN: LazyLock<Selector> = LazyLock::new(|| selector(UPLOADED));

/// Parsed download-button title.
#[derive(Debug, PartialEq, Eq)]
pub struct Metadata {
    pub resolution: String,
    pub image_type: String,
    pub size: String,
}

/// Parse a detail page. `url` is only used in error messages.
pub fn parse(html: &str, url: &str) -> Result<ImageRecord> {
    let doc = Html::parse_document(html);

    let title = text_of(require(&doc, &TITLE, "viewer title", url)?);
    let uploader = text_of(require(&doc, &UPLOADER_SEL, "uploader", url)?)
        .trim()
        .to_string();

    let button = require(&doc, &DOWNLOAD, "download button", url)?;
    let raw_meta = require_attr(button, "title", "download title", url)?;
    let meta = split_metadata(raw_meta).ok_or_else(|| ScrapeError::Metadata {
        title: raw_meta.to_string(),
        url: url.to_string(),
    })?;

    let counts = doc
        .select(&COUNTS)
        .last()
        .ok_or_else(|| ScrapeError::missing("views/likes", url))?;
    let (views, likes) = split_views_likes(&text_of(counts))
        .ok_or_else(|| ScrapeError::missing("likes line", url))?;

    let [image_url, image_link, thumb_url, lq_url] = share_urls(&doc, url)?;

    let meta_p = require(&doc, &META, "description meta", url)?;
    let uploaded = text_of(require_in(meta_p, &SPAN, "upload time", url)?);

    debug!(url, %title, res = %meta.resolution, "parsed image page");

    Ok(ImageRecord {
        image_url,
        image_link,
        thumb_url,
        lq_url,
        title,
        size: meta.size,
        extension: extension_for(&meta.image_type),
        resolution: meta.resolution,
        image_type: meta.image_type,
        views,
        likes,
        uploader,
        uploaded,
    })
}

/// `"W x H - TYPE NUM UNIT"` → resolution, type, `"NUM UNIT"`.
/// Segments past the second `-` and tokens past the third are ignored.
pub fn split_metadata(title: &str) -> Option<Metadata> {
    let mut segs = title.split('-');
    let res = segs.next()?;
    let mut tokens = segs.next()?.split_whitespace();
    let image_type = tokens.next()?;
    let number = tokens.next()?;
    let unit = tokens.next()?;

    Some(Metadata {
        resolution: res.trim().to_string(),
        image_type: image_type.to_string(),
        size: format!("{number} {unit}"),
    })
}

/// Trimmed block text split on newlines: line 0 as-is, line 1 trimmed.
pub fn split_views_likes(text: &str) -> Option<(String, String)> {
    let mut lines = text.trim().split('\n');
    let views = lines.next()?.to_string();
    let likes = lines.next()?.trim().to_string();
    Some((views, likes))
}

/// Input values of the first share item's labelled children, in order.
/// Missing slots stay empty; anything past the fourth is dropped.
fn share_urls(doc: &Html, url: &str) -> Result<[String; SHARE_SLOTS]> {
    let item = require(doc, &SHARE, "share panel", url)?;

    let mut slots: [String; SHARE_SLOTS] = Default::default();
    for (slot, label) in slots.iter_mut().zip(item.select(&LABEL)) {
        let input = require_in(label, &INPUT, "share input", url)?;
        *slot = require_attr(input, "value", "share input value", url)?.to_string();
    }
    Ok(slots)
}
