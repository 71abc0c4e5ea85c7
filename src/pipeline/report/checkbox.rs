//! Checkbox notation: `☒ Yes`, `[X] No`, `Yes [X]`, bare `No x` / `x Yes`.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Answer;
use crate::pipeline::fields::parse_yes_no;

const MARKER: &str = r"(?:[☒☑✔✓⊠■☐□]|\[[ \t]*[xX✓✔]?[ \t]*\])";
const ANSWER_WORD: &str = r"(yes|no|n/a)";

static MARKER_ANY: LazyLock<Regex> = LazyLock::new(|| Regex::new(MARKER).expect("valid regex"));

static MARKER_BEFORE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)({MARKER})[ \t]*{ANSWER_WORD}\b")).expect("valid regex")
});

static WORD_BEFORE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b{ANSWER_WORD}[ \t]*({MARKER})")).expect("valid regex")
});

static BARE_WORD_X: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)\b(yes|no)[ \t]+x([ \t,;:.]|$)").expect("valid regex")
});

static BARE_X_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)(^|[ \t])x[ \t]+(yes|no)\b").expect("valid regex")
});

/// Which notation produced a detected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxNotation {
    /// Glyph or bracket marker.
    Marker,
    /// Lone `x` beside the answer word.
    Bare,
}

/// Outcome of scanning a span for checkbox notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckboxScan {
    pub answer: Option<Answer>,
    pub notation: Option<CheckboxNotation>,
    /// Checked markers disagreed (e.g. both Yes and No ticked).
    pub conflicting: bool,
}

/// Detect the ticked answer. Never fails: malformed or conflicting
/// notation yields no answer.
pub fn detect_checkbox(text: &str) -> CheckboxScan {
    if MARKER_ANY.is_match(text) {
        return scan_markers(text);
    }
    scan_bare(text)
}

/// Remove checkbox notation after detection. Conflicting notation is left
/// in place so the reader can resolve it.
pub fn strip_checkboxes(text: &str, scan: &CheckboxScan) -> String {
    if scan.conflicting {
        return text.to_string();
    }
    match scan.notation {
        Some(CheckboxNotation::Bare) => {
            let text = BARE_WORD_X.replace_all(text, "${1}${2}");
            BARE_X_WORD.replace_all(&text, "${1}${2}").into_owned()
        }
        _ => MARKER_ANY.replace_all(text, "").into_owned(),
    }
}

fn scan_markers(text: &str) -> CheckboxScan {
    let marker_first: Vec<(String, String)> = MARKER_BEFORE_WORD
        .captures_iter(text)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect();
    let word_first: Vec<(String, String)> = WORD_BEFORE_MARKER
        .captures_iter(text)
        .map(|c| (c[2].to_string(), c[1].to_string()))
        .collect();

    // Ties favour marker-before-word, the common template layout.
    let pairs = if word_first.len() > marker_first.len() {
        word_first
    } else {
        marker_first
    };

    let checked: Vec<Answer> = pairs
        .iter()
        .filter(|(marker, _)| is_checked(marker))
        .filter_map(|(_, word)| parse_yes_no(word))
        .collect();

    resolve(checked, CheckboxNotation::Marker)
}

fn scan_bare(text: &str) -> CheckboxScan {
    let checked: Vec<Answer> = BARE_WORD_X
        .captures_iter(text)
        .filter_map(|c| parse_yes_no(&c[1]))
        .chain(BARE_X_WORD.captures_iter(text).filter_map(|c| parse_yes_no(&c[2])))
        .collect();
    if checked.is_empty() {
        return CheckboxScan::default();
    }
    resolve(checked, CheckboxNotation::Bare)
}

fn resolve(checked: Vec<Answer>, notation: CheckboxNotation) -> CheckboxScan {
    let Some(&first) = checked.first() else {
        return CheckboxScan {
            notation: Some(notation),
            ..Default::default()
        };
    };
    if checked.iter().any(|a| *a != first) {
        tracing::debug!(markers = checked.len(), "Conflicting checkbox answers; none recorded");
        return CheckboxScan {
            answer: None,
            notation: Some(notation),
            conflicting: true,
        };
    }
    CheckboxScan {
        answer: Some(first),
        notation: Some(notation),
        conflicting: false,
    }
}

fn is_checked(marker: &str) -> bool {
    match marker.chars().next() {
        Some('☐' | '□') => false,
        Some('[') => marker.chars().any(|c| matches!(c, 'x' | 'X' | '✓' | '✔')),
        Some(_) => true,
        None => false,
    }
}
