//! Table Tools


use scraper::Html;
use tracing::warn;
use url::Url;

use crate::error::Result;
use crate::selectors::{ANCHOR_SELECTOR, TABLE_ENTRY_SELECTOR};
use crate::services::fetch::{fetch_page, Fetcher, PageOutcome};
use crate::tools::clean::raw_text;
use crate::tools::infobox::extract_infobox;
use crate::tools::normalize::NormalizeOptions;
use crate::types::TableEntry;

/// One italic entry of a sortable table, before any link is followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLink {
    pub title: String,
    pub href: Option<String>,
}

/// Collect the italic entries of every sortable wikitable, in document order.
pub fn table_links(html: &str) -> Vec<TableLink> {
    let doc = Html::parse_document(html);
    doc.select(&TABLE_ENTRY_SELECTOR)
        .map(|entry| TableLink {
            title: raw_text(&entry),
            href: entry
                .select(&ANCHOR_SELECTOR)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string),
        })
        .collect()
}

/// Turn every sortable-table entry into a [`TableEntry`].
///
/// Unlinked entries become title stubs. Linked entries are fetched and their
/// infobox extracted; linked pages are not scanned for further tables. A
/// linked page that cannot be fetched falls back to the entry's title stub.
pub fn extract_tables(
    html: &str,
    base_url: &Url,
    fetcher: &dyn Fetcher,
    opts: &NormalizeOptions,
) -> Result<Vec<TableEntry>> {
    let mut entries = Vec::new();

    for link in table_links(html) {
        let Some(href) = link.href else {
            entries.push(TableEntry::stub(link.title));
            continue;
        };

        let target = match base_url.join(&href) {
            Ok(url) => url,
            Err(e) => {
                warn!(href = %href, error = %e, "unresolvable table link");
                entries.push(TableEntry::stub(link.title));
                continue;
            }
        };

        match fetch_page(fetcher, target.as_str()) {
            PageOutcome::Loaded(page) => {
                entries.push(TableEntry::Record(extract_infobox(&page.html, opts)?));
            }
            PageOutcome::Unavailable { .. } => entries.push(TableEntry::stub(link.title)),
        }
    }

    Ok(entries)
}
