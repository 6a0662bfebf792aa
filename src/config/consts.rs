// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0";

// Class lists match as sets: any order, extra classes allowed.

// Listing page
pub const PAGINATION: &str = "ul.content-listing-pagination.visible";
pub const PAGINATION_NEXT: &str = "li.pagination-next a";
pub const LISTING_CONTAINER: &str = "div#content-listing-tabs";
pub const IMAGE_CONTAINER: &str = "a.image-container";

// Detail page
pub const CONTENT_BLOCK: &str = "div.content-width";
pub const VIEWER_TITLE: &str = "h1.viewer-title";
pub const UPLOADER: &str = "span.breadcrum-text.float-left";
pub const DOWNLOAD_BUTTON: &str = "a.btn.btn-download.default";
pub const VIEWS_LIKES: &str = "div.header div.header-content-right";
pub const SHARE_ITEM: &str = "div.panel-share div.panel-share-item";
pub const SHARE_LABEL: &str = "div.panel-share-input-label.copy-hover-display";
pub const SHARE_INPUT: &str = "input";
pub const UPLOADED_META: &str = "p.description-meta.margin-bottom-5";
pub const UPLOADED: &str = "span";

// Share panel order: full image, page link, thumbnail, low quality
pub const SHARE_SLOTS: usize = 4;

// Export
pub const DEFAULT_FILE: &str = "images";

// Logging
pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";
