//! Infobox Tools


use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::Result;
use crate::selectors::{
    ANCHOR_SELECTOR, DATA_SELECTOR, FOOTNOTE_SELECTOR, IMAGE_SELECTOR, INFOBOX_SELECTOR,
    LABEL_SELECTOR, ROW_SELECTOR, TITLE_SELECTOR,
};
use crate::tools::clean::{clean_text, raw_text};
use crate::tools::field::extract_field;
use crate::tools::normalize::NormalizeOptions;
use crate::types::{FieldValue, InfoboxRecord};

/// Extract the infobox of a page.
///
/// Pages without an infobox give an empty record.
pub fn extract_infobox(html: &str, opts: &NormalizeOptions) -> Result<InfoboxRecord> {
    let mut doc = Html::parse_document(html);
    if doc.select(&INFOBOX_SELECTOR).next().is_none() {
        return Ok(InfoboxRecord::new());
    }

    let removed = strip_footnotes(&mut doc);
    debug!(removed, "footnote markers stripped");

    match doc.select(&INFOBOX_SELECTOR).next() {
        Some(infobox) => read_infobox(infobox, opts),
        None => Ok(InfoboxRecord::new()),
    }
}

/// Detach every footnote marker from the document. Returns how many were removed.
pub fn strip_footnotes(doc: &mut Html) -> usize {
    let ids: Vec<_> = doc.select(&FOOTNOTE_SELECTOR).map(|el| el.id()).collect();
    for id in &ids {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }
    ids.len()
}

fn read_infobox(infobox: ElementRef, opts: &NormalizeOptions) -> Result<InfoboxRecord> {
    let mut record = InfoboxRecord::new();
    let all_rows: Vec<ElementRef> = infobox.select(&ROW_SELECTOR).collect();
    let mut rows = all_rows.as_slice();

    if let Some(title) = rows.first().and_then(|r| r.select(&TITLE_SELECTOR).next()) {
        record.insert(InfoboxRecord::TITLE, FieldValue::Text(raw_text(&title)));
        rows = &rows[1..];
    }

    if let Some(image) = rows.first().and_then(|r| r.select(&IMAGE_SELECTOR).next()) {
        let href = image
            .select(&ANCHOR_SELECTOR)
            .next()
            .and_then(|a| a.value().attr("href"));
        match href {
            Some(href) => record.insert(InfoboxRecord::IMAGE, FieldValue::Text(href.to_string())),
            None => debug!("infobox image banner has no link"),
        }
        rows = &rows[1..];
    }

    for row in rows {
        let Some(label_cell) = row.select(&LABEL_SELECTOR).next() else {
            continue;
        };
        let label = clean_text(&label_cell);
        if label.is_empty() {
            continue;
        }
        let Some(data_cell) = row.select(&DATA_SELECTOR).next() else {
            debug!(label = %label, "infobox row has no data cell");
            continue;
        };
        let value = extract_field(data_cell, &label, opts)?;
        record.insert(label, value);
    }

    Ok(record)
}
