use crate::config::Settings;
use crate::engine::{SearchScraper, WikiScraper};
use crate::error::Result;
use crate::services::fetch::ReqwestFetcher;
use crate::services::log::{record, LogLevel};
use crate::services::store::{OutputStore, SavedFiles};
use crate::types::ScrapeOutput;
use std::time::Instant;

fn log_outcome<T>(target: &str, event: &str, start: Instant, result: &Result<T>) {
    let ms = start.elapsed().as_millis();
    match result {
        Ok(_) => record(
            LogLevel::Info,
            Some(target),
            event,
            Some(&format!("succeeded in {ms}ms")),
        ),
        Err(e) => record(
            LogLevel::Error,
            Some(target),
            event,
            Some(&format!("failed in {ms}ms: {e}")),
        ),
    }
}

/* ------------ extraction entrypoints ------------ */

/// Scrape one article with a fresh HTTP session.
pub fn scrape_wikipedia(page_id: &str, settings: &Settings) -> Result<ScrapeOutput> {
    let start = Instant::now();
    let result = run_scrape(page_id, settings);
    log_outcome(page_id, "scrape", start, &result);
    result
}

fn run_scrape(page_id: &str, settings: &Settings) -> Result<ScrapeOutput> {
    let fetcher = ReqwestFetcher::new(settings)?;
    let scraper = WikiScraper::new(&fetcher, settings)?;
    scraper.scrape(page_id)
}

/// Scrape one article and write both JSON files into `settings.output_dir`.
pub fn scrape_and_save(page_id: &str, settings: &Settings) -> Result<SavedFiles> {
    let output = scrape_wikipedia(page_id, settings)?;
    OutputStore::new(&settings.output_dir).save_output(page_id, &output)
}

/// Link texts of the search results page for `keyword`.
pub fn search_google(keyword: &str, settings: &Settings) -> Result<Vec<String>> {
    let start = Instant::now();
    let result = run_search(keyword, settings);
    log_outcome(keyword, "search", start, &result);
    result
}

fn run_search(keyword: &str, settings: &Settings) -> Result<Vec<String>> {
    let fetcher = ReqwestFetcher::new(settings)?;
    let scraper = SearchScraper::new(&fetcher, settings)?;
    scraper.search(keyword)
}
