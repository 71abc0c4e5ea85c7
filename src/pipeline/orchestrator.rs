//! Import orchestrator.
//!
//! Single entry point that drives one extracted document through the
//! engine: classify → (segment → clean → typed fields) for prior reports,
//! or classify → episodes → note buckets → diagnosis scan for notes.
//! The outcome is a complete value; callers decide what to apply.

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use super::fields::{
    details_from_field_map, extract_diagnoses, extract_patient_details, extract_signature,
    Diagnosis, SectionFields,
};
use super::notes::{classify_notes, CategoryRule};
use super::report::{classify_document, parse_report, DocumentClassification};
use super::EngineError;
use crate::config::{EngineConfig, ENGINE_NAME, ENGINE_VERSION};
use crate::models::{
    ClassificationResult, ClinicalNote, Episode, ExtractedDocument, ParsedSection, ReportKind,
    SectionKind,
};
use crate::schema::SectionSchema;

// ═══════════════════════════════════════════
// Episode seam
// ═══════════════════════════════════════════

/// Supplies admission episodes for a set of notes. Implemented by the
/// timeline builder outside this crate.
pub trait EpisodeSource {
    fn episodes(&self, notes: &[ClinicalNote]) -> Vec<Episode>;
}

/// An already-built timeline, returned as-is for every document.
#[derive(Debug, Clone, Default)]
pub struct StaticEpisodes(pub Vec<Episode>);

impl EpisodeSource for StaticEpisodes {
    fn episodes(&self, _notes: &[ClinicalNote]) -> Vec<Episode> {
        self.0.clone()
    }
}

// ═══════════════════════════════════════════
// Outcomes
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum ImportOutcome {
    Report(ReportImport),
    Notes(NotesImport),
}

impl ImportOutcome {
    pub fn import_id(&self) -> Uuid {
        match self {
            ImportOutcome::Report(r) => r.import_id,
            ImportOutcome::Notes(n) => n.import_id,
        }
    }

    pub fn classification(&self) -> DocumentClassification {
        match self {
            ImportOutcome::Report(r) => r.classification,
            ImportOutcome::Notes(n) => n.classification,
        }
    }
}

/// A prior report split into sections.
#[derive(Debug, Clone, Serialize)]
pub struct ReportImport {
    pub import_id: Uuid,
    pub report_kind: ReportKind,
    pub classification: DocumentClassification,
    pub sections: Vec<ParsedSection>,
    /// Typed fields keyed by section id, only for sections that carry them.
    pub fields: BTreeMap<String, SectionFields>,
}

impl ReportImport {
    pub fn section(&self, id: &str) -> Option<&ParsedSection> {
        self.sections.iter().find(|s| s.section_id == id)
    }

    /// Every schema section mapped to its rendered text, `None` when the
    /// section was not found or held nothing.
    pub fn section_text_map(&self) -> BTreeMap<String, Option<String>> {
        SectionSchema::for_kind(self.report_kind)
            .sections
            .iter()
            .map(|spec| {
                let text = self
                    .section(spec.id)
                    .filter(|s| !s.is_empty())
                    .map(ParsedSection::display_text);
                (spec.id.to_string(), text)
            })
            .collect()
    }
}

/// Clinical notes bucketed into report categories.
#[derive(Debug, Clone, Serialize)]
pub struct NotesImport {
    pub import_id: Uuid,
    pub classification: DocumentClassification,
    pub episodes: Vec<Episode>,
    pub entries: ClassificationResult,
    pub diagnoses: Vec<Diagnosis>,
}

// ═══════════════════════════════════════════
// Importer
// ═══════════════════════════════════════════

pub struct DocumentImporter {
    episodes: Box<dyn EpisodeSource + Send + Sync>,
    config: EngineConfig,
}

impl DocumentImporter {
    pub fn new(episodes: Box<dyn EpisodeSource + Send + Sync>, config: EngineConfig) -> Self {
        tracing::debug!(engine = ENGINE_NAME, version = ENGINE_VERSION, "Document importer ready");
        Self { episodes, config }
    }

    /// Like `new`, but rejects a configuration that fails validation.
    pub fn try_new(
        episodes: Box<dyn EpisodeSource + Send + Sync>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::new(episodes, config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one document through the engine. Never fails: ambiguous input
    /// takes the notes path and missing structure yields empty results.
    pub fn import(
        &self,
        doc: &ExtractedDocument,
        report_kind: ReportKind,
        rules: &[CategoryRule],
    ) -> ImportOutcome {
        let import_id = Uuid::new_v4();
        let span = tracing::info_span!("import", %import_id, report_kind = %report_kind);
        let _guard = span.enter();

        let schema = SectionSchema::for_kind(report_kind);
        let classification = classify_document(doc, schema, &self.config.classifier);

        if classification.is_prior_report() {
            ImportOutcome::Report(self.import_report(import_id, doc, report_kind, classification))
        } else {
            ImportOutcome::Notes(self.import_notes(import_id, doc, rules, classification))
        }
    }

    fn import_report(
        &self,
        import_id: Uuid,
        doc: &ExtractedDocument,
        report_kind: ReportKind,
        classification: DocumentClassification,
    ) -> ReportImport {
        let schema = SectionSchema::for_kind(report_kind);
        let sections = parse_report(&doc.scan_text(), schema, &self.config);

        let fields: BTreeMap<String, SectionFields> = sections
            .iter()
            .filter_map(|s| section_fields(s, doc).map(|f| (s.section_id.clone(), f)))
            .collect();

        tracing::info!(
            sections = sections.len(),
            schema_sections = schema.sections.len(),
            typed_fields = fields.len(),
            "Prior report imported"
        );

        ReportImport {
            import_id,
            report_kind,
            classification,
            sections,
            fields,
        }
    }

    fn import_notes(
        &self,
        import_id: Uuid,
        doc: &ExtractedDocument,
        rules: &[CategoryRule],
        classification: DocumentClassification,
    ) -> NotesImport {
        let episodes = self.episodes.episodes(&doc.notes);
        let entries = classify_notes(&doc.notes, &episodes, rules, &self.config.notes);
        let diagnoses = extract_diagnoses(&doc.scan_text());

        tracing::info!(
            notes = doc.notes.len(),
            episodes = episodes.len(),
            categories = entries.categories().count(),
            diagnoses = diagnoses.len(),
            "Clinical notes imported"
        );

        NotesImport {
            import_id,
            classification,
            episodes,
            entries,
            diagnoses,
        }
    }
}

/// Typed fields for sections whose kind carries them. Empty extractions
/// are dropped.
fn section_fields(section: &ParsedSection, doc: &ExtractedDocument) -> Option<SectionFields> {
    match section.kind {
        SectionKind::PatientDetails => {
            let mut details = extract_patient_details(&section.raw_span);
            details.fill_missing(details_from_field_map(&doc.patient_fields));
            (!details.is_empty()).then_some(SectionFields::PatientDetails(details))
        }
        SectionKind::Diagnosis => {
            let found = extract_diagnoses(&section.cleaned_text);
            (!found.is_empty()).then_some(SectionFields::Diagnoses(found))
        }
        SectionKind::Signature => {
            let signature = extract_signature(&section.raw_span);
            (!signature.is_empty()).then_some(SectionFields::Signature(signature))
        }
        SectionKind::Narrative | SectionKind::YesNo => None,
    }
}
