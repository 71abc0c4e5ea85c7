use serde::{Deserialize, Serialize};

use super::enums::{Answer, SectionKind};

/// Raw span of one located section, sliced from the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpan {
    pub section_id: String,
    pub number: u8,
    /// Byte offset of the section start in the original text.
    pub start: usize,
    /// Byte offset one past the section end.
    pub end: usize,
    pub raw: String,
}

/// A located and cleaned section of a prior report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSection {
    pub section_id: String,
    pub number: u8,
    pub kind: SectionKind,
    pub raw_span: String,
    pub cleaned_text: String,
    pub detected_answer: Option<Answer>,
}

impl ParsedSection {
    /// Cleaned text with any detected answer rendered as a leading line,
    /// so every Yes/No section reads the same regardless of the notation
    /// the source template used.
    pub fn display_text(&self) -> String {
        render_answer(self.detected_answer, &self.cleaned_text)
    }

    pub fn is_empty(&self) -> bool {
        self.cleaned_text.is_empty() && self.detected_answer.is_none()
    }
}

/// Prefix `body` with the answer label on its own line.
pub fn render_answer(answer: Option<Answer>, body: &str) -> String {
    match answer {
        Some(a) if body.is_empty() => a.label().to_string(),
        Some(a) => format!("{}\n{}", a.label(), body),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(answer: Option<Answer>, text: &str) -> ParsedSection {
        ParsedSection {
            section_id: "adjustments".into(),
            number: 3,
            kind: SectionKind::YesNo,
            raw_span: String::new(),
            cleaned_text: text.into(),
            detected_answer: answer,
        }
    }

    #[test]
    fn display_prefixes_answer() {
        let s = section(Some(Answer::Yes), "Needs breaks.");
        assert_eq!(s.display_text(), "Yes\nNeeds breaks.");
    }

    #[test]
    fn display_answer_only() {
        assert_eq!(section(Some(Answer::No), "").display_text(), "No");
    }

    #[test]
    fn display_without_answer_is_body() {
        assert_eq!(section(None, "Free text").display_text(), "Free text");
        assert!(section(None, "").is_empty());
        assert!(!section(Some(Answer::No), "").is_empty());
    }
}
