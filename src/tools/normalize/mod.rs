pub mod types;
mod utils;


pub use types::*;
use utils::*;

use crate::error::{Result, ScrapeError};

/// A literal substring and what replaces it.
pub type StripRule = (&'static str, &'static str);

/// Markers removed from numeric text before tokenizing, in application order.
pub const STRIP_RULES: [StripRule; 7] = [
    ("$", ""),
    (",", ""),
    (">", ""),
    ("under ", ""),
    ("est. ", ""),
    ("A", ""),
    ("US", ""),
];

/// Apply one rule to every occurrence in `value`.
pub fn apply_rule(value: &str, rule: StripRule) -> String {
    value.replace(rule.0, rule.1)
}

/// Run `value` through every [`STRIP_RULES`] entry in order.
pub fn strip_markers(value: &str) -> String {
    STRIP_RULES
        .iter()
        .fold(value.to_string(), |acc, rule| apply_rule(&acc, *rule))
}

/// Turn raw numeric text into the token list [`normalize`] expects.
///
/// A currency glyph glued to the amount (`¥500`) becomes its own token.
pub fn tokenize(value: &str) -> Vec<String> {
    let stripped = strip_markers(value);
    let mut tokens: Vec<String> = stripped.split(' ').map(str::to_string).collect();

    let lead = if tokens.first().is_some_and(|t| t.is_empty()) { 1 } else { 0 };
    let glued = tokens
        .get(lead)
        .and_then(|t| split_glyph(t))
        .map(|(glyph, amount)| (glyph.to_string(), amount.to_string()));
    if let Some((glyph, amount)) = glued {
        tokens[lead] = amount;
        tokens.insert(lead, glyph);
    }
    tokens
}

/// Convert numeric text to a float, treating `unknown` (any case) as absent.
pub fn normalize_text(value: &str, field: &str, opts: &NormalizeOptions) -> Result<Option<f64>> {
    if value.trim().eq_ignore_ascii_case("unknown") {
        return Ok(None);
    }
    normalize(&tokenize(value), field, opts).map(Some)
}

/// Convert a tokenized numeric value into a float.
///
/// Ranges become their midpoint, currency glyphs are converted with the fixed
/// rates in `opts`, and a `million`/`billion` token after the amount scales the
/// result.
pub fn normalize<S: AsRef<str>>(tokens: &[S], field: &str, opts: &NormalizeOptions) -> Result<f64> {
    let mut tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
    if tokens.first() == Some(&"") {
        tokens.remove(0);
    }

    let lead = *tokens.first().ok_or_else(|| ScrapeError::parse(field, ""))?;
    let amount = if is_currency_glyph(lead) {
        *tokens.get(1).ok_or_else(|| ScrapeError::parse(field, lead))?
    } else {
        lead
    };
    let numeric = amount.replace('~', "");
    let rates = &opts.rates;

    let value = if let Some((low, high)) = split_range(&numeric) {
        (parse_float(field, low)? + parse_float(field, high)?) / 2.0
    } else if numeric.contains('U') {
        parse_float(field, &numeric.replace('U', ""))? * rates.u_code
    } else if numeric.contains('₹') {
        parse_float(field, &digits_only(&numeric))? * rates.rupee
    } else if lead == "¥" {
        tokens.remove(0);
        parse_float(field, &numeric)? * rates.yen
    } else if lead == "₹" {
        tokens.remove(0);
        parse_float(field, &numeric)? * rates.rupee
    } else if lead == "₽" {
        tokens.remove(0);
        parse_float(field, &numeric)? * rates.ruble
    } else {
        parse_float(field, &numeric)?
    };

    // The amount sits at index 0 once a leading glyph has been consumed.
    let scaled = match tokens.get(1) {
        Some(suffix) if suffix.eq_ignore_ascii_case("million") => value * MILLION,
        Some(suffix) if suffix.eq_ignore_ascii_case("billion") => value * opts.billion.factor(),
        _ => value,
    };
    Ok(scaled)
}
