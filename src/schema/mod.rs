//! Static section catalogs, one per tribunal report type.
//!
//! Each catalog is plain data: the segmenter, cleaner and orchestrator are
//! driven entirely by these tables, so no per-section branching exists in
//! code. Fragments and phrases are written lowercase with straight quotes;
//! they are normalised again at use.

mod clinician;
mod common;
mod nursing;

use serde::Serialize;

use crate::models::{ReportKind, SectionKind};

pub use common::SUB_QUESTION_PHRASES;

/// One numbered section of a report template.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionSpec {
    pub id: &'static str,
    pub number: u8,
    pub kind: SectionKind,
    /// Literal phrases that locate the section start in flattened text,
    /// in preference order. Several historical phrasings may coexist.
    pub heading_fragments: &'static [&'static str],
    /// Full heading texts and known typo variants, stripped by the cleaner.
    pub heading_phrases: &'static [&'static str],
}

impl SectionSpec {
    pub fn is_yes_no(&self) -> bool {
        self.kind == SectionKind::YesNo
    }
}

/// Fixed, numbered catalog of topics one report type must cover.
#[derive(Debug, Serialize)]
pub struct SectionSchema {
    pub kind: ReportKind,
    pub title: &'static str,
    pub sections: &'static [SectionSpec],
    /// Canonical phrases that only appear in completed reports of this type.
    pub fingerprints: &'static [&'static str],
}

impl SectionSchema {
    pub fn for_kind(kind: ReportKind) -> &'static SectionSchema {
        match kind {
            ReportKind::Clinician => &clinician::CLINICIAN_SCHEMA,
            ReportKind::Nursing => &nursing::NURSING_SCHEMA,
        }
    }

    /// Highest section number in the catalog.
    pub fn max_number(&self) -> u8 {
        self.sections.iter().map(|s| s.number).max().unwrap_or(0)
    }

    pub fn section(&self, id: &str) -> Option<&'static SectionSpec> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_by_number(&self, number: u8) -> Option<&'static SectionSpec> {
        self.sections.iter().find(|s| s.number == number)
    }
}
