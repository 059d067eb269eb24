use crate::error::{Result, ScrapeError};

/// Currency glyphs that may stand alone in front of the amount.
pub(super) const CURRENCY_GLYPHS: [char; 3] = ['¥', '₹', '₽'];

/// Range separators in precedence order.
const RANGE_DASHES: [char; 3] = ['–', '-', '—'];

pub(super) fn is_currency_glyph(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if CURRENCY_GLYPHS.contains(&c))
}

/// Split `¥500` into `¥` and `500`; any other token is returned untouched.
pub(super) fn split_glyph(token: &str) -> Option<(&str, &str)> {
    let first = token.chars().next()?;
    if !CURRENCY_GLYPHS.contains(&first) {
        return None;
    }
    let (glyph, rest) = token.split_at(first.len_utf8());
    (!rest.is_empty()).then_some((glyph, rest))
}

/// First matching range separator wins; a leading `-` is a sign, not a range.
pub(super) fn split_range(value: &str) -> Option<(&str, &str)> {
    for dash in RANGE_DASHES {
        if dash == '-' && value.starts_with('-') {
            continue;
        }
        if value.contains(dash) {
            let mut parts = value.split(dash);
            let low = parts.next().unwrap_or_default();
            let high = parts.next().unwrap_or_default();
            return Some((low, high));
        }
    }
    None
}

pub(super) fn parse_float(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ScrapeError::parse(field, raw))
}

pub(super) fn digits_only(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}
