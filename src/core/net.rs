// src/core/net.rs
//
// Blocking HTTP GET. Every request carries `User-Agent: Mozilla/5.0` and
// nothing else: no cookies, no timeout, no retries.

use tracing::debug;
use url::Url;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// Anything that can turn a page URL into its HTML body.
/// Scrape operations take `&dyn Fetch` so they can run against fixtures.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Real network fetcher over a shared `ureq::Agent`.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder()
            .user_agent(USER_AGENT)
            .http_status_as_error(true)
            .build();
        Self { agent: config.into() }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = check_url(url)?;
        debug!(url = %parsed, "GET");

        let http_err = |source: ureq::Error| ScrapeError::Http {
            url: url.to_string(),
            source: Box::new(source),
        };
        let mut resp = self.agent.get(parsed.as_str()).call().map_err(http_err)?;
        resp.body_mut().read_to_string().map_err(http_err)
    }
}

/// Parse `url`, separating "no scheme at all" from every other defect.
pub fn check_url(url: &str) -> Result<Url> {
    match Url::parse(url) {
        Ok(u) => Ok(u),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Err(ScrapeError::MissingScheme(url.to_string()))
        }
        Err(source) => Err(ScrapeError::InvalidUrl { url: url.to_string(), source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_and_bare_host_urls_lack_scheme() {
        for u in ["/album/abc?page=2", "imgpile.com/album/abc", "", "page2"] {
            let err = check_url(u).unwrap_err();
            assert!(err.is_missing_scheme(), "{u:?} → {err}");
        }
    }

    #[test]
    fn broken_absolute_url_is_not_missing_scheme() {
        let err = check_url("https://").unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidUrl { .. }), "{err}");
    }

    #[test]
    fn absolute_url_passes() {
        let u = check_url("https://imgpile.com/album/abc").unwrap();
        assert_eq!(u.host_str(), Some("imgpile.com"));
    }

    #[test]
    fn http_fetcher_rejects_schemeless_without_network() {
        let err = HttpFetcher::new().fetch("imgpile.com/album/abc").unwrap_err();
        assert!(err.is_missing_scheme());
    }
}
