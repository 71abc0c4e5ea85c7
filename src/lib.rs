//! Extraction and classification engine for mental health tribunal reports.
//!
//! Input is a document already reduced to flat text plus discrete clinical
//! notes. The engine decides whether it is a completed prior report or a
//! stream of notes, then either splits and cleans the report sections or
//! buckets the notes into report categories.

pub mod config;
pub mod models;
pub mod pipeline;
pub mod schema;

pub use config::EngineConfig;
pub use pipeline::notes::{default_category_rules, CategoryRule};
pub use pipeline::{
    DocumentImporter, EngineError, EpisodeSource, ImportOutcome, NotesImport, ReportImport,
    StaticEpisodes,
};
pub use schema::SectionSchema;
