use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enums::EpisodeKind;

/// A document as handed over by the upstream format extractor
/// (PDF/DOCX/XLSX → flat text + discrete notes).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Flattened document text. May be a single line.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub notes: Vec<ClinicalNote>,
    /// Loose key/value fields the extractor recognised (e.g. from a header table).
    #[serde(default)]
    pub patient_fields: BTreeMap<String, String>,
}

impl ExtractedDocument {
    /// Text used for structural scans: the flattened text, or the note
    /// bodies joined by newlines when the extractor produced notes only.
    pub fn scan_text(&self) -> String {
        if !self.text.trim().is_empty() {
            return self.text.clone();
        }
        self.notes
            .iter()
            .map(|n| n.body.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One entry from a chronological clinical record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalNote {
    pub id: String,
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub note_type: String,
    pub body: String,
}

impl ClinicalNote {
    /// Calendar day the note was written, if known.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.map(|d| d.date())
    }

    /// Body length in characters.
    pub fn body_chars(&self) -> usize {
        self.body.chars().count()
    }
}

/// A continuous care period supplied by the timeline builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub start: NaiveDate,
    /// `None` while the episode is still open.
    pub end: Option<NaiveDate>,
    pub kind: EpisodeKind,
}

impl Episode {
    pub fn inpatient(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self {
            start,
            end,
            kind: EpisodeKind::Inpatient,
        }
    }

    pub fn is_inpatient(&self) -> bool {
        self.kind == EpisodeKind::Inpatient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(body: &str) -> ClinicalNote {
        ClinicalNote {
            id: "n1".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 4)
                .unwrap()
                .and_hms_opt(14, 30, 0),
            author: "Dr A".into(),
            note_type: "Medical".into(),
            body: body.into(),
        }
    }

    #[test]
    fn scan_text_prefers_flattened_text() {
        let doc = ExtractedDocument {
            text: "1. Patient details".into(),
            notes: vec![note("ignored")],
            ..Default::default()
        };
        assert_eq!(doc.scan_text(), "1. Patient details");
    }

    #[test]
    fn scan_text_falls_back_to_note_bodies() {
        let doc = ExtractedDocument {
            text: "   ".into(),
            notes: vec![note("first"), note("second")],
            ..Default::default()
        };
        assert_eq!(doc.scan_text(), "first\nsecond");
    }

    #[test]
    fn note_day_drops_time() {
        assert_eq!(note("x").day(), NaiveDate::from_ymd_opt(2024, 3, 4));
    }

    #[test]
    fn document_deserializes_with_missing_fields() {
        let doc: ExtractedDocument = serde_json::from_str(r#"{"text": "abc"}"#).unwrap();
        assert_eq!(doc.text, "abc");
        assert!(doc.notes.is_empty());
        assert!(doc.patient_fields.is_empty());
    }

    #[test]
    fn episode_kind_checks() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(Episode::inpatient(start, None).is_inpatient());
        let community = Episode {
            start,
            end: None,
            kind: EpisodeKind::Community,
        };
        assert!(!community.is_inpatient());
    }
}
