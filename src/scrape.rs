// src/scrape.rs
//
// Album walk: listing pages (in pagination order) → detail links (in page
// order) → one ImageRecord per link. Strictly sequential, one request at a
// time. Any failure aborts the run with no partial result, except a page URL
// without a scheme, which only ends the pagination walk.

use tracing::{info, warn};

use crate::{
    core::net::Fetch,
    data::ImageRecord,
    error::{Result, ScrapeError},
    progress::{NullProgress, Progress},
    specs,
};

/// Detail-page links of one listing page. Single pass, document order.
#[derive(Debug)]
pub struct ImageLinks {
    inner: std::vec::IntoIter<String>,
}

impl Iterator for ImageLinks {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ImageLinks {}

/// Whole run: every image of every page of the album at `start_url`.
pub fn collect_images(
    fetcher: &dyn Fetch,
    start_url: &str,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<ImageRecord>> {
    let mut null = NullProgress;
    let p: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    p.log("[Info] Starting Page Crawl...");
    let pages = walk_pages(fetcher, start_url, p)?;
    p.log(&format!("[Info] {} Pages Extracted...", pages.len()));
    info!(pages = pages.len(), start = start_url, "pagination walked");

    p.begin(pages.len());
    p.log("[Info] Extracting Images");

    let mut records = Vec::new();
    for page in &pages {
        for link in extract_image_links(fetcher, page)? {
            p.log(&format!("[Info] Extracted Image link: {link}"));
            records.push(extract_image_data(fetcher, &link)?);
            p.item_done(records.len(), &link);
        }
    }

    info!(records = records.len(), "album scraped");
    p.finish(records.len());
    Ok(records)
}

/// Pagination pages starting at (and including) `start_page`, in order.
pub fn extract_pages(
    fetcher: &dyn Fetch,
    start_page: &str,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<String>> {
    let mut null = NullProgress;
    let p: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    walk_pages(fetcher, start_page, p)
}

// No visited set and no depth cap: a next link pointing back to an earlier
// page keeps the walk going.
fn walk_pages(fetcher: &dyn Fetch, start_page: &str, p: &mut dyn Progress) -> Result<Vec<String>> {
    let mut pages: Vec<String> = Vec::new();
    let mut next = Some(start_page.to_string());

    while let Some(page) = next.take() {
        p.log(&format!("[Info] Extracting Page: {page}"));

        let html = match fetcher.fetch(&page) {
            Ok(html) => html,
            Err(ScrapeError::MissingScheme(url)) => {
                warn!(%url, "page URL has no scheme; pagination stops here");
                if pages.is_empty() {
                    pages.push(page);
                }
                break;
            }
            Err(e) => return Err(e),
        };

        info!(page = %page, index = pages.len(), "page extracted");
        pages.push(page);
        next = specs::pagination::next_page(&html);
    }

    Ok(pages)
}

/// Fetch a listing page and list its image detail links.
pub fn extract_image_links(fetcher: &dyn Fetch, page: &str) -> Result<ImageLinks> {
    let html = fetcher.fetch(page)?;
    let links = specs::listing::image_links(&html, page)?;
    info!(page, count = links.len(), "image links listed");
    Ok(ImageLinks { inner: links.into_iter() })
}

/// Fetch one image detail page and parse its record.
pub fn extract_image_data(fetcher: &dyn Fetch, image_url: &str) -> Result<ImageRecord> {
    let html = fetcher.fetch(image_url)?;
    specs::detail::parse(&html, image_url)
}
