//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// The film/event infobox container.
pub static INFOBOX_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("table.infobox.vevent"));

/// Table rows.
pub static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("tr"));

/// Banner cell holding the infobox title.
pub static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| sel(".infobox-above.summary"));

/// Banner cell holding the lead image.
pub static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| sel(".infobox-image"));

pub static LABEL_SELECTOR: Lazy<Selector> = Lazy::new(|| sel(".infobox-label"));

pub static DATA_SELECTOR: Lazy<Selector> = Lazy::new(|| sel(".infobox-data"));

/// Footnote/reference markers.
pub static FOOTNOTE_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("sup"));

pub static LIST_ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("li"));

pub static LINE_BREAK_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("br"));

pub static SPAN_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("span"));

/// Italic entries of sortable wikitables.
pub static TABLE_ENTRY_SELECTOR: Lazy<Selector> = Lazy::new(|| sel(".wikitable.sortable i"));

/// Any anchor, with or without href.
pub static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("a"));
