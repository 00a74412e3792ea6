//! Small helpers shared by the HTML page parsers.

use scraper::{ElementRef, Selector};

use crate::core::CsError;

pub(crate) fn selector(css: &str) -> Result<Selector, CsError> {
    Selector::parse(css).map_err(|e| CsError::Data(format!("bad selector `{css}`: {e}")))
}

/// Collapse runs of whitespace (including NBSP) into single spaces and trim.
pub(crate) fn normalize_ws(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '\u{a0}')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// All descendant text of `el`, whitespace-collapsed.
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

