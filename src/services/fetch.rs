use crate::config::Settings;
use crate::error::{Result, ScrapeError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::redirect;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{info, warn};

const REDIRECT_LIMIT: usize = 10;

/// Anything that can turn a URL into page HTML.
pub trait Fetcher {
    fn name(&self) -> &'static str;
    fn fetch(&self, url: &str) -> Result<FetchResult>;
}

/// A fetched page with a little telemetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub url: String,
    pub html: String,
    pub status: u16,
    pub duration_ms: u64,
}

/// Outcome of asking for one page. Callers must branch on it.
#[derive(Debug, Clone)]
pub enum PageOutcome {
    Loaded(FetchResult),
    Unavailable { url: String, reason: String },
}

impl PageOutcome {
    pub fn html(&self) -> Option<&str> {
        match self {
            PageOutcome::Loaded(page) => Some(&page.html),
            PageOutcome::Unavailable { .. } => None,
        }
    }
}

/// Fetch `url`, logging and absorbing transport failures.
pub fn fetch_page(fetcher: &dyn Fetcher, url: &str) -> PageOutcome {
    info!(fetcher = fetcher.name(), url, "fetching page");
    match fetcher.fetch(url) {
        Ok(page) => PageOutcome::Loaded(page),
        Err(e) => {
            warn!(url, error = %e, "page unavailable");
            PageOutcome::Unavailable {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

/// Blocking fetcher backed by one reused reqwest session.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: build_client(settings)?,
        })
    }
}

impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest-blocking"
    }

    fn fetch(&self, url: &str) -> Result<FetchResult> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::transport(url, format!("HTTP status {status}")));
        }
        let html = response
            .text()
            .map_err(|e| ScrapeError::transport(url, format!("failed to read body: {e}")))?;

        Ok(FetchResult {
            url: url.to_string(),
            html,
            status: status.as_u16(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

fn build_client(settings: &Settings) -> Result<Client> {
    let client = Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .default_headers(default_headers(&settings.user_agent))
        // blocking clients default to 30s; `None` lifts the limit
        .timeout(settings.timeout_ms.map(Duration::from_millis))
        .build()?;
    Ok(client)
}

fn default_headers(user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).unwrap_or(HeaderValue::from_static("Mozilla/5.0")),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::StaticFetcher;

    #[test]
    fn default_headers_carry_user_agent() {
        let headers = default_headers("wikibox-test/1.0");
        assert_eq!(
            headers.get(USER_AGENT).and_then(|v| v.to_str().ok()),
            Some("wikibox-test/1.0")
        );
        assert!(headers.contains_key(ACCEPT));
    }

    #[test]
    fn invalid_user_agent_falls_back() {
        let headers = default_headers("bad\nagent");
        assert_eq!(
            headers.get(USER_AGENT).and_then(|v| v.to_str().ok()),
            Some("Mozilla/5.0")
        );
    }

    #[test]
    fn client_builds_from_default_settings() {
        assert!(ReqwestFetcher::new(&Settings::default()).is_ok());
    }

    #[test]
    fn fetch_page_branches_on_failure() {
        let fetcher = StaticFetcher::new().with_page("https://x.test/a", "<html></html>");

        let loaded = fetch_page(&fetcher, "https://x.test/a");
        assert_eq!(loaded.html(), Some("<html></html>"));

        match fetch_page(&fetcher, "https://x.test/missing") {
            PageOutcome::Unavailable { url, reason } => {
                assert_eq!(url, "https://x.test/missing");
                assert!(reason.contains("not found"));
            }
            PageOutcome::Loaded(_) => panic!("missing page should be unavailable"),
        }
    }
}
