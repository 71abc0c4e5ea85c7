use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DAY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})$").expect("valid regex")
});

static YEAR_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})[/.\-](\d{1,2})[/.\-](\d{1,2})$").expect("valid regex"));

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").expect("valid regex"));

static EIGHT_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}$").expect("valid regex"));

/// Candidate date substrings inside longer text, most specific forms first.
static DATE_CANDIDATES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b\d{4}-\d{1,2}-\d{1,2}\b",
        r"\b\d{1,2}[/.\-]\d{1,2}[/.\-](?:\d{4}|\d{2})\b",
        r"(?i)\b\d{1,2}(?:st|nd|rd|th)?\s+[a-z]{3,9},?\s+\d{4}\b",
        r"(?i)\b[a-z]{3,9}\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4}\b",
        r"\b\d{8}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

const LONG_FORMATS: &[&str] = &["%d %B %Y", "%B %d %Y", "%d %B, %Y", "%B %d, %Y"];

/// Parse a date written in any of the forms found on tribunal paperwork.
///
/// Tried in order: numeric separators (`18/07/1991`, `18-07-91`,
/// `1991-07-18`), long form with ordinal suffixes removed (`18th July 1991`,
/// `July 18th 1991`), the same with commas removed, and a bare 8-digit run
/// read as `DDMMYYYY`. Returns `None` when nothing parses.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim().trim_end_matches(['.', ',', ';']);
    if trimmed.is_empty() {
        return None;
    }

    if let Some(d) = parse_numeric(trimmed) {
        return Some(d);
    }

    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    let without_ordinals = ORDINAL.replace_all(&collapsed, "$1");
    if let Some(d) = parse_long_form(&without_ordinals) {
        return Some(d);
    }

    let without_commas = without_ordinals
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(d) = parse_long_form(&without_commas) {
        return Some(d);
    }

    if EIGHT_DIGITS.is_match(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%d%m%Y").ok();
    }
    None
}

/// First parseable date anywhere in `text`, by position.
pub fn find_date(text: &str) -> Option<NaiveDate> {
    let mut candidates: Vec<(usize, &str)> = DATE_CANDIDATES
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| (m.start(), m.as_str())))
        .collect();
    candidates.sort_by_key(|(start, _)| *start);
    candidates.into_iter().find_map(|(_, c)| parse_date(c))
}

fn parse_numeric(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = YEAR_FIRST.captures(text) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let caps = DAY_FIRST.captures(text)?;
    let normalized = format!("{}/{}/{}", &caps[1], &caps[2], &caps[3]);
    // chrono's %y pivots two-digit years: 69-99 → 19xx, 00-68 → 20xx
    let format = if caps[3].len() == 2 { "%d/%m/%y" } else { "%d/%m/%Y" };
    NaiveDate::parse_from_str(&normalized, format).ok()
}

fn parse_long_form(text: &str) -> Option<NaiveDate> {
    LONG_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}
