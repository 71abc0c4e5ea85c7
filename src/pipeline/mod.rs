pub mod text;
pub mod fields;
pub mod report; // Prior-report path: detect, segment, clean
pub mod notes; // Clinical-notes path: clerking detection + bucketing
pub mod orchestrator;


pub use fields::*;
pub use report::*;
pub use notes::*;
pub use orchestrator::*;

use thiserror::Error;

/// Errors from the fallible edges of the engine (configuration and string
/// parsing). Extraction itself never fails: it degrades to empty results.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid {field} value: {value:?}")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
