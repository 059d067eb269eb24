//! Field Tools


use scraper::ElementRef;

use crate::error::Result;
use crate::selectors::{LINE_BREAK_SELECTOR, LIST_ITEM_SELECTOR, SPAN_SELECTOR};
use crate::tools::clean::{clean_text, stripped_strings};
use crate::tools::normalize::{is_numeric_field, normalize_text, NormalizeOptions};
use crate::types::FieldValue;

/// Shape of a data cell before numeric handling.
#[derive(Debug, Clone, PartialEq)]
enum CellText {
    Lines(Vec<String>),
    Scalar(String),
}

/// Extract the value of one infobox data cell.
///
/// List items win over line breaks, which win over plain text. Cells of the
/// numeric fields (`running time`, `budget`, `box office`) always come back as
/// a number or null.
pub fn extract_field(cell: ElementRef, label: &str, opts: &NormalizeOptions) -> Result<FieldValue> {
    let text = read_cell(&cell);

    if !is_numeric_field(label) {
        return Ok(match text {
            CellText::Lines(lines) => FieldValue::List(lines),
            CellText::Scalar(s) => FieldValue::Text(s),
        });
    }

    let scalar = match text {
        CellText::Scalar(s) => Some(s),
        CellText::Lines(lines) => lines.into_iter().next(),
    };
    match scalar {
        Some(s) => Ok(normalize_text(&s, label, opts)?.into()),
        None => Ok(FieldValue::Null),
    }
}

fn read_cell(cell: &ElementRef) -> CellText {
    let items: Vec<ElementRef> = cell.select(&LIST_ITEM_SELECTOR).collect();
    if !items.is_empty() {
        return CellText::Lines(items.iter().map(clean_text).collect());
    }

    if cell.select(&LINE_BREAK_SELECTOR).next().is_some() {
        return CellText::Lines(
            stripped_strings(cell)
                .into_iter()
                .map(str::to_string)
                .collect(),
        );
    }

    let text = clean_text(cell);
    if !text.is_empty() {
        return CellText::Scalar(text);
    }
    let nested = cell
        .select(&SPAN_SELECTOR)
        .next()
        .map(|span| clean_text(&span))
        .unwrap_or_default();
    CellText::Scalar(nested)
}
