//! Tiered detection of admission clerking notes.
//!
//! Tier 1 looks for medical authors writing a clerking inside each
//! admission window. Tier 2 falls back to structural history headers in
//! the same window. Tier 3 is document-wide and only runs when no episode
//! matched at all; its episode association is a best guess and is flagged.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{Duration, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::NoteWindowConfig;
use crate::models::{ClinicalNote, Episode};
use crate::pipeline::text::{contains_keyword, NormalizedText};

const MEDICAL_ROLE_SUBSTRINGS: &[&str] = &["med", "doctor", "clinician", "physician"];

static MEDICAL_GRADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:sho|ct[1-3]|st[1-8]|fy[12]|f[12]|spr|registrar|consultant)\b")
        .expect("valid regex")
});

const CLERKING_TRIGGERS: &[&str] = &[
    "admission clerking",
    "clerking",
    "clerked",
    "admitted under",
    "admission assessment",
    "medical admission",
    "new admission",
    "seen on admission",
];

const AUTHOR_ROLE_TRIGGERS: &[&str] = &["admitting", "on call", "on-call", "duty doctor", "clerking"];

const HISTORY_HEADERS: &[&str] = &[
    "personal history",
    "background history",
    "forensic history",
    "mental state examination",
    "past psychiatric history",
    "psychiatric history",
    "history of presenting complaint",
    "drug and alcohol history",
    "family history",
    "social history",
];

const DOCUMENT_WIDE_HEADER: &str = "personal history";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClerkingTier {
    /// Medical author plus a clerking or role trigger, inside the window.
    Medical,
    /// History headers and sufficient length, inside the window.
    Structural,
    /// Document-wide `personal history` fallback. Episode is inferred.
    DocumentWide,
}

/// A note recognised as an admission clerking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClerkingMatch {
    /// Index into the notes slice passed to `detect_clerkings`.
    pub note_index: usize,
    pub note_id: String,
    pub episode_start: Option<NaiveDate>,
    pub tier: ClerkingTier,
}

/// Find admission clerkings for every inpatient episode.
///
/// A note is reported at most once; duplicates are keyed on
/// `(day, first dedupe_prefix_chars of body)`.
pub fn detect_clerkings(
    notes: &[ClinicalNote],
    episodes: &[Episode],
    config: &NoteWindowConfig,
) -> Vec<ClerkingMatch> {
    let mut inpatient: Vec<&Episode> = episodes.iter().filter(|e| e.is_inpatient()).collect();
    inpatient.sort_by_key(|e| e.start);

    let mut seen: HashSet<(Option<NaiveDate>, String)> = HashSet::new();
    let mut matches = Vec::new();

    for episode in &inpatient {
        let window: Vec<(usize, &ClinicalNote)> = notes
            .iter()
            .enumerate()
            .filter(|(_, n)| in_admission_window(n, episode.start, config.admission_window_days))
            .collect();

        let mut tier = ClerkingTier::Medical;
        let mut found: Vec<usize> = window
            .iter()
            .filter(|(_, n)| is_medical_clerking(n))
            .map(|(i, _)| *i)
            .collect();
        if found.is_empty() {
            tier = ClerkingTier::Structural;
            found = window
                .iter()
                .filter(|(_, n)| {
                    n.body_chars() >= config.clerking_min_chars && has_any_header(&n.body, HISTORY_HEADERS)
                })
                .map(|(i, _)| *i)
                .collect();
        }

        for i in found {
            push_unique(&mut matches, &mut seen, notes, i, Some(episode.start), tier, config);
        }
    }

    if matches.is_empty() {
        for (i, note) in notes.iter().enumerate() {
            if note.body_chars() >= config.clerking_min_chars
                && has_any_header(&note.body, &[DOCUMENT_WIDE_HEADER])
            {
                let start = fallback_episode_start(note.day(), &inpatient);
                push_unique(&mut matches, &mut seen, notes, i, start, ClerkingTier::DocumentWide, config);
            }
        }
        if !matches.is_empty() {
            tracing::warn!(
                matches = matches.len(),
                episodes = inpatient.len(),
                "Clerking assigned by document-wide fallback; episode association unverified"
            );
        }
    }

    tracing::debug!(matches = matches.len(), episodes = inpatient.len(), "Clerking detection complete");
    matches
}

/// Medical role in note type or author, plus a clerking trigger in the
/// body or a role trigger in the author field.
pub fn is_medical_clerking(note: &ClinicalNote) -> bool {
    let author = note.author.to_lowercase();
    let role_text = format!("{} {}", note.note_type.to_lowercase(), author);

    let medical = MEDICAL_ROLE_SUBSTRINGS.iter().any(|s| role_text.contains(s))
        || MEDICAL_GRADE.is_match(&role_text);
    if !medical {
        return false;
    }

    let body = NormalizedText::new(&note.body);
    CLERKING_TRIGGERS.iter().any(|t| body.as_str().contains(t))
        || AUTHOR_ROLE_TRIGGERS.iter().any(|t| author.contains(t))
}

fn has_any_header(body: &str, headers: &[&str]) -> bool {
    let norm = NormalizedText::new(body);
    headers.iter().any(|h| contains_keyword(norm.as_str(), h))
}

fn in_admission_window(note: &ClinicalNote, start: NaiveDate, days: i64) -> bool {
    note.day()
        .is_some_and(|d| d >= start && d <= start + Duration::days(days))
}

/// Latest episode starting on or before the note, else the earliest.
fn fallback_episode_start(day: Option<NaiveDate>, inpatient: &[&Episode]) -> Option<NaiveDate> {
    day.and_then(|d| inpatient.iter().rev().find(|e| e.start <= d))
        .or_else(|| inpatient.first())
        .map(|e| e.start)
}

fn push_unique(
    matches: &mut Vec<ClerkingMatch>,
    seen: &mut HashSet<(Option<NaiveDate>, String)>,
    notes: &[ClinicalNote],
    index: usize,
    episode_start: Option<NaiveDate>,
    tier: ClerkingTier,
    config: &NoteWindowConfig,
) {
    let note = &notes[index];
    let prefix: String = note.body.chars().take(config.dedupe_prefix_chars).collect();
    if !seen.insert((note.day(), prefix)) {
        return;
    }
    matches.push(ClerkingMatch {
        note_index: index,
        note_id: note.id.clone(),
        episode_start,
        tier,
    });
}
