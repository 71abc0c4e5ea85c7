use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::pipeline::EngineError;

/// Engine-level constants
pub const ENGINE_NAME: &str = "tribunal-extract";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `RUST_LOG`-style filter when the environment sets none.
pub fn default_log_filter() -> &'static str {
    "tribunal_extract=info,warn"
}

/// Install the fmt subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .try_init();
}

/// All tunable thresholds of the extraction engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub classifier: ClassifierThresholds,
    pub segmenter: SegmenterConfig,
    pub cleaner: CleanerConfig,
    pub notes: NoteWindowConfig,
}

/// Prior-report vs clinical-notes decision thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierThresholds {
    /// A lone note longer than this is a whole report captured as one note.
    pub single_note_min_chars: usize,
    pub min_numbered_sections: usize,
    pub min_fingerprints: usize,
    /// Relaxed checks apply only to note-less documents longer than this.
    pub relaxed_min_text_chars: usize,
    pub relaxed_min_numbered: usize,
    pub relaxed_min_fingerprints: usize,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            single_note_min_chars: 2_000,
            min_numbered_sections: 5,
            min_fingerprints: 3,
            relaxed_min_text_chars: 500,
            relaxed_min_numbered: 2,
            relaxed_min_fingerprints: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// How far before a heading fragment to look for its section numeral.
    pub lookback_chars: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self { lookback_chars: 30 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// A leading Yes/No token is stripped only if more than this many
    /// characters remain (or nothing remains).
    pub min_content_after_answer: usize,
    pub max_parenthetical_chars: usize,
    pub max_instruction_chars: usize,
    /// Upper bound on whole-pipeline passes while seeking a fixed point.
    pub max_passes: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            min_content_after_answer: 10,
            max_parenthetical_chars: 100,
            max_instruction_chars: 200,
            max_passes: 8,
        }
    }
}

/// Temporal windows and sizes used when bucketing clinical notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteWindowConfig {
    /// Admission window is `[start, start + admission_window_days]`.
    pub admission_window_days: i64,
    /// Recent-episode window opens this many days before the latest start.
    pub recent_lead_days: i64,
    /// Minimum body length for structural (header-based) clerking matches.
    pub clerking_min_chars: usize,
    pub dedupe_prefix_chars: usize,
    pub snippet_chars: usize,
}

impl Default for NoteWindowConfig {
    fn default() -> Self {
        Self {
            admission_window_days: 14,
            recent_lead_days: 2,
            clerking_min_chars: 300,
            dedupe_prefix_chars: 120,
            snippet_chars: 150,
        }
    }
}

impl EngineConfig {
    /// Parse from JSON; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded engine configuration");
        Ok(config)
    }

    /// Reject values that would make a pipeline stage meaningless.
    pub fn validate(&self) -> Result<(), EngineError> {
        let c = &self.classifier;
        if c.min_numbered_sections == 0 || c.min_fingerprints == 0 {
            return Err(invalid("classifier thresholds must be greater than 0"));
        }
        if c.relaxed_min_numbered > c.min_numbered_sections {
            return Err(invalid("relaxed_min_numbered cannot exceed min_numbered_sections"));
        }
        if c.relaxed_min_fingerprints > c.min_fingerprints {
            return Err(invalid("relaxed_min_fingerprints cannot exceed min_fingerprints"));
        }
        if self.segmenter.lookback_chars == 0 {
            return Err(invalid("lookback_chars must be greater than 0"));
        }
        let cl = &self.cleaner;
        if cl.max_passes == 0 {
            return Err(invalid("max_passes must be greater than 0"));
        }
        if cl.max_parenthetical_chars > MAX_CLEANER_SPAN_CHARS
            || cl.max_instruction_chars > MAX_CLEANER_SPAN_CHARS
        {
            return Err(invalid(
                "max_parenthetical_chars and max_instruction_chars cannot exceed 1000",
            ));
        }
        let n = &self.notes;
        if n.admission_window_days <= 0 {
            return Err(invalid("admission_window_days must be greater than 0"));
        }
        if n.recent_lead_days < 0 {
            return Err(invalid("recent_lead_days cannot be negative"));
        }
        if n.snippet_chars == 0 || n.dedupe_prefix_chars == 0 {
            return Err(invalid("snippet_chars and dedupe_prefix_chars must be greater than 0"));
        }
        Ok(())
    }
}

/// Upper bound for the cleaner's bounded repetitions.
pub const MAX_CLEANER_SPAN_CHARS: usize = 1_000;

fn invalid(msg: &str) -> EngineError {
    EngineError::InvalidConfig(msg.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classifier.single_note_min_chars, 2_000);
        assert_eq!(config.segmenter.lookback_chars, 30);
        assert_eq!(config.notes.admission_window_days, 14);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config =
            EngineConfig::from_json_str(r#"{"notes": {"clerking_min_chars": 500}}"#).unwrap();
        assert_eq!(config.notes.clerking_min_chars, 500);
        assert_eq!(config.notes.snippet_chars, 150);
        assert_eq!(config.classifier, ClassifierThresholds::default());
    }

    #[test]
    fn invalid_values_rejected() {
        let err = EngineConfig::from_json_str(r#"{"cleaner": {"max_passes": 0}}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        let err = EngineConfig::from_json_str(
            r#"{"classifier": {"min_numbered_sections": 2, "relaxed_min_numbered": 4}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("relaxed_min_numbered"));
    }

    #[test]
    fn oversized_cleaner_bounds_rejected() {
        let err = EngineConfig::from_json_str(r#"{"cleaner": {"max_instruction_chars": 200000}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("max_instruction_chars"));

        let mut config = EngineConfig::default();
        config.cleaner.max_parenthetical_chars = MAX_CLEANER_SPAN_CHARS + 1;
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));

        config.cleaner.max_parenthetical_chars = MAX_CLEANER_SPAN_CHARS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = EngineConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"segmenter": {{"lookback_chars": 40}}}}"#).unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.segmenter.lookback_chars, 40);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn init_tracing_is_repeatable() {
        init_tracing();
        init_tracing();
        assert_eq!(ENGINE_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
