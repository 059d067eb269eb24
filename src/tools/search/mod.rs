//! Search Tools

use scraper::Html;
use url::Url;

use crate::error::Result;
use crate::selectors::ANCHOR_SELECTOR;
use crate::tools::clean::raw_text;

/// Build `<base>/search?q=<keyword>`.
pub fn search_url(base: &Url, keyword: &str) -> Result<Url> {
    let mut url = base.join("search")?;
    url.query_pairs_mut().clear().append_pair("q", keyword);
    Ok(url)
}

/// Text of every anchor on a results page, in document order.
pub fn extract_link_texts(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    doc.select(&ANCHOR_SELECTOR).map(|a| raw_text(&a)).collect()
}
