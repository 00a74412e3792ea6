//! Text-pattern extraction over whitespace-collapsed paragraph text.
//!
//! Every extractor returns `""` when its pattern is absent; none of them fail.

/// Height, weight and their metric equivalents pulled from one text blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurements {
    pub height: String,
    pub weight: String,
    pub height_metric: String,
    pub weight_metric: String,
}

/// Parse a blob such as `"6-9, 250lb (206cm, 113kg)"`.
pub fn parse_measurements(text: &str) -> Measurements {
    Measurements {
        height: find_feet_inches(text).to_string(),
        weight: find_with_unit(text, "lb").to_string(),
        height_metric: find_with_unit(text, "cm").to_string(),
        weight_metric: find_with_unit(text, "kg").to_string(),
    }
}

/// Byte ranges of every maximal ASCII digit run in `text`.
fn digit_runs(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = text.as_bytes();
    let mut i = 0;
    std::iter::from_fn(move || {
        while i < bytes.len() && !bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i >= bytes.len() {
            return None;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        Some((start, i))
    })
}

/// First `D-D` occurrence (digits, hyphen, digits).
pub fn find_feet_inches(text: &str) -> &str {
    let bytes = text.as_bytes();
    for (start, end) in digit_runs(text) {
        if bytes.get(end) == Some(&b'-') {
            let rest = &bytes[end + 1..];
            let tail = rest.iter().take_while(|b| b.is_ascii_digit()).count();
            if tail > 0 {
                return &text[start..end + 1 + tail];
            }
        }
    }
    ""
}

/// First digit run immediately followed by `unit` (ASCII case-insensitive).
pub fn find_with_unit<'a>(text: &'a str, unit: &str) -> &'a str {
    for (start, end) in digit_runs(text) {
        let after = &text.as_bytes()[end..];
        if after.len() >= unit.len() && after[..unit.len()].eq_ignore_ascii_case(unit.as_bytes()) {
            return &text[start..end + unit.len()];
        }
    }
    ""
}

/// Split `"Label: value"` at the first colon into trimmed halves.
pub fn split_label(text: &str) -> Option<(&str, &str)> {
    let (label, value) = text.split_once(':')?;
    Some((label.trim(), value.trim()))
}

/// Position text ends at the `▪` separator that introduces "Shoots".
pub fn position_value(value: &str) -> &str {
    value.split('▪').next().unwrap_or_default().trim()
}

/// `"December 30, 1984 in Akron, Ohio"` → `("December 30, 1984", "Akron, Ohio")`.
pub fn split_birth(value: &str) -> (&str, &str) {
    match value.split_once(" in ") {
        Some((date, place)) => (date.trim(), place.trim()),
        None => (value.trim(), ""),
    }
}

/// Last comma-separated token of a birthplace, e.g. `"Akron, Ohio"` → `"Ohio"`.
pub fn place_country(place: &str) -> &str {
    place.rsplit(',').next().unwrap_or_default().trim()
}

/// Country code from a flag span's classes, e.g. `["f-i", "f-us"]` → `"US"`.
pub fn flag_country<'a>(classes: impl IntoIterator<Item = &'a str>) -> Option<String> {
    classes
        .into_iter()
        .filter(|c| *c != "f-i")
        .find_map(|c| c.strip_prefix("f-"))
        .filter(|code| !code.is_empty())
        .map(str::to_ascii_uppercase)
}
