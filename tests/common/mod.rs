// tests/common/mod.rs
//
// In-memory imgpile: URL → HTML, plus page builders shaped like the site.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use imgpile_scrape::core::net::check_url;
use imgpile_scrape::{Fetch, Progress, Result, ScrapeError};

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
    /// Fail once this many requests were made (bounds runaway walks).
    pub budget: Cell<Option<usize>>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }
}

impl Fetch for FakeSite {
    fn fetch(&self, url: &str) -> Result<String> {
        check_url(url)?;
        let mut reqs = self.requests.borrow_mut();
        if let Some(max) = self.budget.get() {
            if reqs.len() >= max {
                return Err(ScrapeError::Missing { what: "request budget", url: url.to_string() });
            }
        }
        reqs.push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Missing {
                what: "fixture page (404)",
                url: url.to_string(),
            })
    }
}

/// Progress sink that keeps everything it is told.
#[derive(Default)]
pub struct Recorder {
    pub lines: Vec<String>,
    pub begun: Option<usize>,
    pub done: Vec<(usize, String)>,
    pub finished: Option<usize>,
}

impl Progress for Recorder {
    fn begin(&mut self, pages: usize) {
        self.begun = Some(pages);
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn item_done(&mut self, index: usize, link: &str) {
        self.done.push((index, link.to_string()));
    }
    fn finish(&mut self, records: usize) {
        self.finished = Some(records);
    }
}

/* ---------------- Page builders ---------------- */

pub fn listing_page(image_links: &[&str], next: Option<&str>) -> String {
    let items: String = image_links
        .iter()
        .map(|href| {
            format!(
                r#"<div class="list-item"><a class="image-container --media" href="{href}"><img src="{href}.th.jpg"></a></div>"#
            )
        })
        .collect();
    let pager = match next {
        Some(n) => format!(
            r#"<ul class="content-listing-pagination visible">
                 <li class="pagination-prev"><a href="">Prev</a></li>
                 <li class="pagination-next"><a href="{n}">Next</a></li>
               </ul>"#
        ),
        None => String::from(
            r#"<ul class="content-listing-pagination visible">
                 <li class="pagination-prev"><a href="x">Prev</a></li>
               </ul>"#,
        ),
    };
    format!(
        r#"<html><body>
           <div id="content-listing-tabs"><div class="pad-content-listing">{items}</div></div>
           {pager}
           </body></html>"#
    )
}

pub struct Detail<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub meta: &'a str,
    pub shares: usize,
}

impl<'a> Detail<'a> {
    pub fn new(id: &'a str) -> Self {
        Self { id, title: id, meta: "1920 x 1080 - PNG 2.5 MB", shares: 4 }
    }

    pub fn html(&self) -> String {
        let id = self.id;
        let values = [
            format!("https://imgpile.com/images/{id}.jpg"),
            format!("https://imgpile.com/i/{id}"),
            format!("https://imgpile.com/images/{id}.th.jpg"),
            format!("https://imgpile.com/images/{id}.md.jpg"),
        ];
        let shares: String = values
            .iter()
            .take(self.shares)
            .map(|v| {
                format!(
                    r#"<div class="panel-share-input-label copy-hover-display"><input type="text" value="{v}"></div>"#
                )
            })
            .collect();
        format!(
            r#"<html><body><div class="content-width">
               <div class="header">
                 <span class="breadcrum-text float-left"> owner_{id} </span>
                 <div class="header-content-right">
                   10 views
                   2 likes
                 </div>
               </div>
               <h1 class="viewer-title">{title}</h1>
               <a class="btn btn-download default" title="{meta}">Download</a>
               <p class="description-meta margin-bottom-5">Uploaded <span>3 days ago</span></p>
               <div class="panel-share"><div class="panel-share-item">{shares}</div></div>
               </div></body></html>"#,
            title = self.title,
            meta = self.meta,
        )
    }
}
