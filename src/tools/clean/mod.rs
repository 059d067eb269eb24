//! Text helpers shared by the extractors.

use scraper::ElementRef;

const NBSP: char = '\u{00A0}';

/// Replace non-breaking spaces with plain spaces.
pub fn normalize_nbsp(text: &str) -> String {
    text.replace(NBSP, " ")
}

/// Every text node under `el`, trimmed, with empty ones dropped.
pub fn stripped_strings<'a>(el: &ElementRef<'a>) -> Vec<&'a str> {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Visible text of `el`: trimmed text nodes joined with `sep`.
pub fn joined_text(el: &ElementRef, sep: &str) -> String {
    stripped_strings(el).join(sep)
}

/// Visible text joined with a space, with non-breaking spaces normalized.
pub fn clean_text(el: &ElementRef) -> String {
    normalize_nbsp(&joined_text(el, " "))
}

/// All text nodes concatenated exactly as they appear.
pub fn raw_text(el: &ElementRef) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn test_clean_text_joins_and_trims() {
        let doc = Html::parse_fragment("<table><tr><td> Lana <b>Wachowski</b>\n</td></tr></table>");
        assert_eq!(clean_text(&first(&doc, "td")), "Lana Wachowski");
    }

    #[test]
    fn test_clean_text_replaces_nbsp() {
        let doc = Html::parse_fragment("<table><tr><td>136&nbsp;minutes</td></tr></table>");
        assert_eq!(clean_text(&first(&doc, "td")), "136 minutes");
    }

    #[test]
    fn test_stripped_strings_drops_blank_nodes() {
        let doc = Html::parse_fragment(
            "<table><tr><td>March 31, 1999<br>  <br>(United States)</td></tr></table>",
        );
        assert_eq!(
            stripped_strings(&first(&doc, "td")),
            vec!["March 31, 1999", "(United States)"]
        );
    }

    #[test]
    fn test_raw_text_keeps_spacing() {
        let doc = Html::parse_fragment("<i> Spirited <b>Away</b></i>");
        assert_eq!(raw_text(&first(&doc, "i")), " Spirited Away");
    }
}
