use crate::config::Settings;
use crate::error::Result;
use crate::services::fetch::{fetch_page, Fetcher, PageOutcome};
use crate::tools::infobox::extract_infobox;
use crate::tools::normalize::NormalizeOptions;
use crate::tools::search::{extract_link_texts, search_url};
use crate::tools::tables::extract_tables;
use crate::types::ScrapeOutput;
use tracing::{info, warn};
use url::Url;

/// One wikipedia run: a fetcher session plus the options it was started with.
pub struct WikiScraper<'a> {
    fetcher: &'a dyn Fetcher,
    base_url: Url,
    opts: NormalizeOptions,
}

impl<'a> WikiScraper<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, settings: &Settings) -> Result<Self> {
        Ok(Self {
            fetcher,
            base_url: Url::parse(&settings.wiki_base_url)?,
            opts: settings.normalize,
        })
    }

    /// `<base>/wiki/<page_id>`
    pub fn page_url(&self, page_id: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("wiki/{page_id}"))?)
    }

    /// Infobox and linked tables of one article.
    ///
    /// An unavailable article yields an empty output rather than an error;
    /// malformed numeric values abort.
    pub fn scrape(&self, page_id: &str) -> Result<ScrapeOutput> {
        let url = self.page_url(page_id)?;
        let page = match fetch_page(self.fetcher, url.as_str()) {
            PageOutcome::Loaded(page) => page,
            PageOutcome::Unavailable { reason, .. } => {
                warn!(page_id, reason = %reason, "article unavailable, writing empty output");
                return Ok(ScrapeOutput::default());
            }
        };

        let info_box = extract_infobox(&page.html, &self.opts)?;
        let tables = extract_tables(&page.html, &self.base_url, self.fetcher, &self.opts)?;
        info!(
            page_id,
            fields = info_box.len(),
            tables = tables.len(),
            "article scraped"
        );

        Ok(ScrapeOutput { info_box, tables })
    }
}

/// Search-engine results path.
pub struct SearchScraper<'a> {
    fetcher: &'a dyn Fetcher,
    base_url: Url,
}

impl<'a> SearchScraper<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, settings: &Settings) -> Result<Self> {
        Ok(Self {
            fetcher,
            base_url: Url::parse(&settings.search_base_url)?,
        })
    }

    /// Text of every link on the results page for `keyword`.
    pub fn search(&self, keyword: &str) -> Result<Vec<String>> {
        let url = search_url(&self.base_url, keyword)?;
        Ok(fetch_page(self.fetcher, url.as_str())
            .html()
            .map(extract_link_texts)
            .unwrap_or_default())
    }
}
