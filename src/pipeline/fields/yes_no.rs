use std::sync::LazyLock;

use regex::Regex;

use crate::models::Answer;

static LEADING_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(yes|no|n/a|n\.a\.|na|not applicable)(?:[^a-z0-9/]|$)").expect("valid regex")
});

/// Read an explicit Yes / No / N/A answer.
///
/// Accepts the legacy numeric encoding (`1` yes, `2` no, `3` n/a) as a whole
/// value, otherwise a leading answer word. Surrounding prose is never
/// interpreted.
pub fn parse_yes_no(text: &str) -> Option<Answer> {
    let trimmed = text.trim();
    match trimmed {
        "1" => return Some(Answer::Yes),
        "2" => return Some(Answer::No),
        "3" => return Some(Answer::NotApplicable),
        _ => {}
    }

    let caps = LEADING_ANSWER.captures(trimmed)?;
    match caps[1].to_lowercase().as_str() {
        "yes" => Some(Answer::Yes),
        "no" => Some(Answer::No),
        _ => Some(Answer::NotApplicable),
    }
}
