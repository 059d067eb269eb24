//! Tests

/// Canned pages shared by the extractor and engine tests.
pub(crate) mod fixtures {
    use crate::error::{Result, ScrapeError};
    use crate::services::fetch::{FetchResult, Fetcher};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned HTML by URL and records every request.
    #[derive(Default)]
    pub struct StaticFetcher {
        pages: HashMap<String, String>,
        pub requests: RefCell<Vec<String>>,
    }

    impl StaticFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl Fetcher for StaticFetcher {
        fn name(&self) -> &'static str {
            "static"
        }

        fn fetch(&self, url: &str) -> Result<FetchResult> {
            self.requests.borrow_mut().push(url.to_string());
            match self.pages.get(url) {
                Some(html) => Ok(FetchResult {
                    url: url.to_string(),
                    html: html.clone(),
                    status: 200,
                    duration_ms: 0,
                }),
                None => Err(ScrapeError::transport(url, "HTTP status 404 Not Found (not found)")),
            }
        }
    }

    pub const FILM_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>The Matrix - Wikipedia</title></head>
<body>
<table class="infobox vevent">
  <tbody>
    <tr><th colspan="2" class="infobox-above summary">The Matrix</th></tr>
    <tr><td colspan="2" class="infobox-image"><a href="/wiki/File:The_Matrix_Poster.jpg" class="image"><img src="poster.jpg"></a></td></tr>
    <tr><th class="infobox-label">Directed&nbsp;by</th><td class="infobox-data"><div class="plainlist"><ul><li>Lana Wachowski</li><li>Lilly Wachowski<sup class="reference">[a]</sup></li></ul></div></td></tr>
    <tr><th class="infobox-label">Release dates</th><td class="infobox-data">March 31, 1999<br>(United States)</td></tr>
    <tr><th class="infobox-label">Running time</th><td class="infobox-data">136 minutes<sup class="reference">[1]</sup></td></tr>
    <tr><th class="infobox-label">Country</th><td class="infobox-data">United States</td></tr>
    <tr><th class="infobox-label">Budget</th><td class="infobox-data">$63&nbsp;million<sup class="reference">[2]</sup></td></tr>
    <tr><th class="infobox-label">Box office</th><td class="infobox-data">$463.5&nbsp;million</td></tr>
    <tr><td colspan="2" class="infobox-below">Footer without a label</td></tr>
  </tbody>
</table>
<p>The Matrix is a 1999 science fiction action film.<sup class="reference">[3]</sup></p>
</body></html>"#;

    pub const FILMOGRAPHY_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<table class="infobox vevent">
  <tr><th class="infobox-above summary">The Matrix (franchise)</th></tr>
  <tr><th class="infobox-label">Created by</th><td class="infobox-data">The Wachowskis</td></tr>
</table>
<table class="wikitable sortable">
  <tr><th>Film</th><th>Year</th></tr>
  <tr><td><i><a href="/wiki/The_Matrix">The Matrix</a></i></td><td>1999</td></tr>
  <tr><td><i>The Matrix Online Shorts</i></td><td>2004</td></tr>
  <tr><td><i><a href="/wiki/Sequel_Film">Sequel Film</a></i></td><td>2003</td></tr>
</table>
<table class="wikitable">
  <tr><td><i><a href="/wiki/Not_Sortable">Not sortable</a></i></td></tr>
</table>
</body></html>"#;

    pub const SEQUEL_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<table class="infobox vevent">
  <tr><th class="infobox-above summary">Sequel Film</th></tr>
  <tr><th class="infobox-label">Budget</th><td class="infobox-data">unknown</td></tr>
</table>
<table class="wikitable sortable">
  <tr><td><i><a href="/wiki/Deeper_Link">Deeper Link</a></i></td></tr>
</table>
</body></html>"#;

    pub const PLAIN_PAGE: &str = r#"<!DOCTYPE html>
<html><body><p>No infobox on this page.</p></body></html>"#;

    pub const SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<a href="/url?q=1">The Matrix - Wikipedia</a>
<div><a href="/url?q=2"><span>The Matrix</span> (1999) - IMDb</a></div>
<a>Next</a>
</body></html>"#;
}

mod engine {
    use super::fixtures::*;
    use crate::config::Settings;
    use crate::engine::{SearchScraper, WikiScraper};
    use crate::services::store::OutputStore;
    use crate::tools::normalize::BillionScale;
    use crate::types::{FieldValue, ScrapeOutput, TableEntry};

    const FRANCHISE_URL: &str = "https://en.wikipedia.org/wiki/The_Matrix_(franchise)";

    fn franchise_fetcher() -> StaticFetcher {
        StaticFetcher::new()
            .with_page(FRANCHISE_URL, FILMOGRAPHY_PAGE)
            .with_page("https://en.wikipedia.org/wiki/The_Matrix", FILM_PAGE)
            .with_page("https://en.wikipedia.org/wiki/Sequel_Film", SEQUEL_PAGE)
    }

    #[test]
    fn test_page_url_joins_base() {
        let fetcher = StaticFetcher::new();
        let scraper = WikiScraper::new(&fetcher, &Settings::default()).unwrap();
        assert_eq!(
            scraper.page_url("The_Matrix").unwrap().as_str(),
            "https://en.wikipedia.org/wiki/The_Matrix"
        );
    }

    #[test]
    fn test_scrape_builds_both_outputs() {
        let fetcher = franchise_fetcher();
        let scraper = WikiScraper::new(&fetcher, &Settings::default()).unwrap();

        let output = scraper.scrape("The_Matrix_(franchise)").unwrap();
        assert_eq!(output.info_box.title(), Some("The Matrix (franchise)"));
        assert_eq!(
            output.info_box.get("Created by"),
            Some(&FieldValue::Text("The Wachowskis".into()))
        );
        assert_eq!(output.tables.len(), 3);
        assert_eq!(output.tables[1], TableEntry::stub("The Matrix Online Shorts"));

        // article once, then each linked entry once
        assert_eq!(fetcher.requested().len(), 3);
        assert_eq!(fetcher.requested()[0], FRANCHISE_URL);
    }

    #[test]
    fn test_unavailable_article_gives_empty_output() {
        let fetcher = StaticFetcher::new();
        let scraper = WikiScraper::new(&fetcher, &Settings::default()).unwrap();
        assert_eq!(scraper.scrape("Missing").unwrap(), ScrapeOutput::default());
    }

    #[test]
    fn test_settings_reach_the_normalizer() {
        let page = r#"<table class="infobox vevent">
            <tr><th class="infobox-label">Box office</th><td class="infobox-data">$2 billion</td></tr>
        </table>"#;
        let fetcher = StaticFetcher::new().with_page("https://en.wikipedia.org/wiki/Big", page);

        let legacy = WikiScraper::new(&fetcher, &Settings::default()).unwrap();
        let output = legacy.scrape("Big").unwrap();
        assert_eq!(output.info_box.get("Box office"), Some(&FieldValue::Number(2e12)));

        let mut settings = Settings::default();
        settings.normalize.billion = BillionScale::Short;
        let short = WikiScraper::new(&fetcher, &settings).unwrap();
        let output = short.scrape("Big").unwrap();
        assert_eq!(output.info_box.get("Box office"), Some(&FieldValue::Number(2e9)));
    }

    #[test]
    fn test_scrape_then_save_round_trips() {
        let fetcher = franchise_fetcher();
        let scraper = WikiScraper::new(&fetcher, &Settings::default()).unwrap();
        let output = scraper.scrape("The_Matrix_(franchise)").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let store = OutputStore::new(dir.path());
        store.save_output("The_Matrix_(franchise)", &output).unwrap();
        assert_eq!(store.load_output("The_Matrix_(franchise)").unwrap(), output);
    }

    #[test]
    fn test_search_collects_link_texts() {
        let fetcher = StaticFetcher::new()
            .with_page("https://www.google.com/search?q=The+Matrix", SEARCH_PAGE);
        let scraper = SearchScraper::new(&fetcher, &Settings::default()).unwrap();

        let texts = scraper.search("The Matrix").unwrap();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0], "The Matrix - Wikipedia");

        assert!(scraper.search("nothing cached").unwrap().is_empty());
    }
}
