// src/data.rs
//
// One scraped image. Every field is the page's text, untouched: sizes and
// counts are not parsed into numbers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub image_url: String,
    pub image_link: String,
    pub thumb_url: String,
    pub lq_url: String,
    pub title: String,
    pub size: String,
    pub resolution: String,
    pub extension: String,
    pub image_type: String,
    pub views: String,
    pub likes: String,
    pub uploader: String,
    pub uploaded: String,
}

impl ImageRecord {
    /// Column names, in serialization order.
    pub const HEADERS: [&'static str; 13] = [
        "image_url", "image_link", "thumb_url", "lq_url", "title", "size",
        "resolution", "extension", "image_type", "views", "likes", "uploader",
        "uploaded",
    ];
}

/// `.jpg` for `JPG`.
pub fn extension_for(image_type: &str) -> String {
    format!(".{}", image_type.to_lowercase())
}
