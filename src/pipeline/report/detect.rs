use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierThresholds;
use crate::models::{DocumentKind, ExtractedDocument};
use crate::pipeline::text::NormalizedText;
use crate::schema::SectionSchema;

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(\d+)[.)]").expect("valid regex"));

/// Which check decided the document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum ClassificationSignal {
    SingleLongNote,
    NumberedSections { count: usize },
    Fingerprints { count: usize },
    RelaxedNumbered { count: usize },
    RelaxedFingerprint { count: usize },
    /// Nothing conclusive; treated as clinical notes.
    Ambiguous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentClassification {
    pub kind: DocumentKind,
    pub signal: ClassificationSignal,
}

impl DocumentClassification {
    pub fn is_prior_report(&self) -> bool {
        self.kind == DocumentKind::PriorReport
    }
}

/// Decide whether a document is a completed report or a stream of notes.
///
/// Checks run strongest first and the first hit wins. Anything
/// inconclusive resolves to `ClinicalNotes`, which never invents section
/// structure.
pub fn classify_document(
    doc: &ExtractedDocument,
    schema: &SectionSchema,
    thresholds: &ClassifierThresholds,
) -> DocumentClassification {
    let result = run_checks(doc, schema, thresholds);
    tracing::debug!(
        kind = %result.kind,
        signal = ?result.signal,
        notes = doc.notes.len(),
        "Document classified"
    );
    result
}

fn run_checks(
    doc: &ExtractedDocument,
    schema: &SectionSchema,
    t: &ClassifierThresholds,
) -> DocumentClassification {
    let report = |signal| DocumentClassification {
        kind: DocumentKind::PriorReport,
        signal,
    };

    // 1. Whole report captured as one note
    if let [only] = doc.notes.as_slice() {
        if only.body_chars() > t.single_note_min_chars {
            return report(ClassificationSignal::SingleLongNote);
        }
    }

    let scan = doc.scan_text();

    // 2. Numbered section lines
    let numbered = count_numbered_sections(&scan, schema.max_number());
    if numbered >= t.min_numbered_sections {
        return report(ClassificationSignal::NumberedSections { count: numbered });
    }

    // 3. Canonical phrases
    let fingerprints = count_fingerprints(&scan, schema);
    if fingerprints >= t.min_fingerprints {
        return report(ClassificationSignal::Fingerprints { count: fingerprints });
    }

    // 4. Relaxed checks for long note-less text
    if doc.notes.is_empty() && doc.text.chars().count() > t.relaxed_min_text_chars {
        if numbered >= t.relaxed_min_numbered {
            return report(ClassificationSignal::RelaxedNumbered { count: numbered });
        }
        if fingerprints >= t.relaxed_min_fingerprints {
            return report(ClassificationSignal::RelaxedFingerprint {
                count: fingerprints,
            });
        }
    }

    DocumentClassification {
        kind: DocumentKind::ClinicalNotes,
        signal: ClassificationSignal::Ambiguous,
    }
}

/// Distinct leading line numbers within `1..=max_number`.
fn count_numbered_sections(text: &str, max_number: u8) -> usize {
    NUMBERED_LINE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .filter(|n| (1..=u32::from(max_number)).contains(n))
        .collect::<BTreeSet<_>>()
        .len()
}

/// Distinct schema fingerprint phrases present anywhere in the text.
fn count_fingerprints(text: &str, schema: &SectionSchema) -> usize {
    let norm = NormalizedText::new(text);
    schema
        .fingerprints
        .iter()
        .filter(|fp| norm.as_str().contains(**fp))
        .count()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{ClinicalNote, ReportKind};

    fn schema() -> &'static SectionSchema {
        SectionSchema::for_kind(ReportKind::Clinician)
    }

    fn note(id: &str, body: &str) -> ClinicalNote {
        ClinicalNote {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(10, 0, 0),
            author: "RMN B".into(),
            note_type: "Nursing".into(),
            body: body.into(),
        }
    }

    fn classify(doc: &ExtractedDocument) -> DocumentClassification {
        classify_document(doc, schema(), &ClassifierThresholds::default())
    }

    #[test]
    fn six_numbered_lines_is_prior_report() {
        let doc = ExtractedDocument {
            text: "1. The patient is a 34 year old man.\n\
                   2. He understands the purpose of the hearing.\n\
                   3. He would like an advocate present.\n\
                   4. There is a conviction for assault.\n\
                   5. He was first admitted in 2012.\n\
                   6. He stopped taking medication in May."
                .into(),
            ..Default::default()
        };
        let result = classify(&doc);
        assert!(result.is_prior_report());
        assert_eq!(result.signal, ClassificationSignal::NumberedSections { count: 6 });
    }

    #[test]
    fn short_notes_without_fingerprints_are_notes() {
        let doc = ExtractedDocument {
            notes: vec![
                note("a", "Settled on the ward. Ate well."),
                note("b", "Attended OT group, engaged."),
                note("c", "Slept well, no concerns overnight."),
            ],
            ..Default::default()
        };
        let result = classify(&doc);
        assert_eq!(result.kind, DocumentKind::ClinicalNotes);
        assert_eq!(result.signal, ClassificationSignal::Ambiguous);
    }

    #[test]
    fn single_long_note_is_prior_report() {
        let doc = ExtractedDocument {
            notes: vec![note("a", &"Lengthy narrative. ".repeat(120))],
            ..Default::default()
        };
        assert_eq!(classify(&doc).signal, ClassificationSignal::SingleLongNote);
    }

    #[test]
    fn out_of_range_numbers_do_not_count() {
        let doc = ExtractedDocument {
            text: "40. a\n41. b\n42. c\n43. d\n44. e\n0. f".into(),
            notes: vec![note("a", "x")],
            ..Default::default()
        };
        assert_eq!(classify(&doc).kind, DocumentKind::ClinicalNotes);
    }

    #[test]
    fn fingerprints_with_curly_quotes() {
        let doc = ExtractedDocument {
            text: "The Mental Health Act applies. Nearest relative consulted. \
                   Section 117 after-care is arranged by the Responsible Clinician\u{2019}s team."
                .into(),
            notes: vec![note("a", "x"), note("b", "y")],
            ..Default::default()
        };
        let result = classify(&doc);
        assert_eq!(result.signal, ClassificationSignal::Fingerprints { count: 4 });
    }

    #[test]
    fn relaxed_checks_need_long_noteless_text() {
        let filler = "Free text describing the admission in some detail. ".repeat(12);
        let doc = ExtractedDocument {
            text: format!("{filler}\nHis nearest relative is his mother."),
            ..Default::default()
        };
        assert_eq!(
            classify(&doc).signal,
            ClassificationSignal::RelaxedFingerprint { count: 1 }
        );

        let short = ExtractedDocument {
            text: "His nearest relative is his mother.".into(),
            ..Default::default()
        };
        assert_eq!(classify(&short).kind, DocumentKind::ClinicalNotes);
    }

    #[test]
    fn relaxed_numbered() {
        let filler = "Narrative continues at length about progress on the ward. ".repeat(10);
        let doc = ExtractedDocument {
            text: format!("1. Background\n{filler}\n2. Progress\n{filler}"),
            ..Default::default()
        };
        assert_eq!(
            classify(&doc).signal,
            ClassificationSignal::RelaxedNumbered { count: 2 }
        );
    }
}
