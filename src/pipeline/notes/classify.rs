use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate};

use super::clerking::{detect_clerkings, ClerkingMatch};
use super::rules::CategoryRule;
use crate::config::NoteWindowConfig;
use crate::models::{ClassificationResult, ClinicalNote, Episode, ImportedEntry, MatchPolicy};
use crate::pipeline::text::{snippet, NormalizedText};

/// Bucket clinical notes into report categories.
///
/// Every qualifying note becomes an unselected `ImportedEntry` in each of
/// its buckets, and each copy lists all categories the note matched.
pub fn classify_notes(
    notes: &[ClinicalNote],
    episodes: &[Episode],
    rules: &[CategoryRule],
    config: &NoteWindowConfig,
) -> ClassificationResult {
    let clerkings: HashMap<usize, ClerkingMatch> =
        if rules.iter().any(|r| r.policy == MatchPolicy::EpisodeWindowed) {
            detect_clerkings(notes, episodes, config)
                .into_iter()
                .map(|m| (m.note_index, m))
                .collect()
        } else {
            HashMap::new()
        };

    let recent_window = latest_inpatient_start(episodes).map(|start| {
        (
            start - Duration::days(config.recent_lead_days),
            start + Duration::days(config.admission_window_days),
        )
    });

    let mut buckets: BTreeMap<String, Vec<ImportedEntry>> = BTreeMap::new();

    for (i, note) in notes.iter().enumerate() {
        let body = NormalizedText::new(&note.body);
        let clerking = clerkings.get(&i);

        let mut categories: Vec<String> = Vec::new();
        let mut episode_start = None;
        for rule in rules {
            let qualifies = match rule.policy {
                MatchPolicy::EpisodeWindowed => clerking.is_some(),
                MatchPolicy::RecentEpisodeWindowed => {
                    in_window(note.day(), recent_window) && rule.matches_keyword(body.as_str())
                }
                MatchPolicy::GlobalKeyword => rule.matches_keyword(body.as_str()),
            };
            if !qualifies || categories.contains(&rule.id) {
                continue;
            }
            if rule.policy == MatchPolicy::EpisodeWindowed {
                episode_start = clerking.and_then(|m| m.episode_start);
            }
            categories.push(rule.id.clone());
        }

        if categories.is_empty() {
            continue;
        }

        let entry = ImportedEntry {
            note_id: note.id.clone(),
            date: note.date,
            text: note.body.clone(),
            snippet: snippet(&note.body, config.snippet_chars),
            selected: false,
            categories: categories.clone(),
            episode_start,
        };
        for category in categories {
            buckets.entry(category).or_default().push(entry.clone());
        }
    }

    let result = ClassificationResult::from_buckets(buckets);
    tracing::info!(
        notes = notes.len(),
        entries = result.entry_count(),
        clerkings = clerkings.len(),
        "Clinical notes classified"
    );
    result
}

fn latest_inpatient_start(episodes: &[Episode]) -> Option<NaiveDate> {
    episodes
        .iter()
        .filter(|e| e.is_inpatient())
        .map(|e| e.start)
        .max()
}

fn in_window(day: Option<NaiveDate>, window: Option<(NaiveDate, NaiveDate)>) -> bool {
    match (day, window) {
        (Some(d), Some((from, to))) => d >= from && d <= to,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EpisodeKind;
    use crate::pipeline::notes::rules::default_category_rules;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn note(id: &str, day: Option<NaiveDate>, author: &str, body: &str) -> ClinicalNote {
        ClinicalNote {
            id: id.into(),
            date: day.and_then(|d| d.and_hms_opt(9, 30, 0)),
            author: author.into(),
            note_type: "Progress note".into(),
            body: body.into(),
        }
    }

    fn classify(notes: &[ClinicalNote], episodes: &[Episode]) -> ClassificationResult {
        classify_notes(notes, episodes, &default_category_rules(), &NoteWindowConfig::default())
    }

    #[test]
    fn clerking_inside_window_only() {
        let start = date(2024, 1, 1);
        let notes = vec![
            note("early", Some(date(2024, 1, 4)), "Dr A, SHO", "Admission clerking completed."),
            note("late", Some(date(2024, 2, 10)), "Dr A, SHO", "Admission clerking completed."),
        ];
        let result = classify(&notes, &[Episode::inpatient(start, None)]);

        let clerking = result.get("admission_clerking");
        assert_eq!(clerking.len(), 1);
        assert_eq!(clerking[0].note_id, "early");
        assert_eq!(clerking[0].episode_start, Some(start));
        assert!(!clerking[0].selected);
    }

    #[test]
    fn recent_window_includes_lead_days() {
        let start = date(2024, 5, 10);
        let notes = vec![
            note("before", Some(date(2024, 5, 8)), "RMN", "Presented to A&E with police."),
            note("too_early", Some(date(2024, 5, 7)), "RMN", "Presented to A&E."),
            note("edge", Some(date(2024, 5, 24)), "RMN", "Admission paperwork reviewed."),
            note("after", Some(date(2024, 5, 25)), "RMN", "Admission paperwork reviewed."),
        ];
        let result = classify(&notes, &[Episode::inpatient(start, None)]);
        let ids: Vec<&str> = result
            .get("current_admission")
            .iter()
            .map(|e| e.note_id.as_str())
            .collect();
        assert_eq!(ids, vec!["edge", "before"]);
    }

    #[test]
    fn recent_window_uses_latest_inpatient_episode() {
        let notes = vec![note("old", Some(date(2023, 1, 3)), "RMN", "Admitted overnight.")];
        let episodes = vec![
            Episode::inpatient(date(2023, 1, 1), Some(date(2023, 2, 1))),
            Episode::inpatient(date(2024, 1, 1), None),
        ];
        assert!(classify(&notes, &episodes).get("current_admission").is_empty());
    }

    #[test]
    fn global_keywords_are_whole_word_and_multi_category() {
        let notes = vec![
            note("a", Some(date(2024, 3, 1)), "RMN", "Punched a wall after his tenancy ended; UDS positive for cannabis."),
            note("b", Some(date(2024, 3, 2)), "RMN", "Discussed the assaultive history of the ward culture."),
        ];
        let result = classify(&notes, &[]);

        for bucket in ["incidents", "housing", "substance_use"] {
            let entries = result.get(bucket);
            assert_eq!(entries.len(), 1, "{bucket}");
            assert_eq!(entries[0].note_id, "a");
            assert_eq!(
                entries[0].categories,
                vec!["housing", "substance_use", "incidents"]
            );
        }
        assert!(result.get("admission_clerking").is_empty());
    }

    #[test]
    fn buckets_sorted_newest_first_with_undated_last() {
        let notes = vec![
            note("undated", None, "RMN", "Rent arrears letter received."),
            note("old", Some(date(2024, 1, 1)), "RMN", "Debt advice given."),
            note("new", Some(date(2024, 6, 1)), "RMN", "Universal credit claim made."),
        ];
        let result = classify(&notes, &[]);
        let ids: Vec<&str> = result.get("finances").iter().map(|e| e.note_id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "undated"]);
    }

    #[test]
    fn snippet_truncated_with_ellipsis() {
        let body = format!("Accommodation review. {}", "x".repeat(300));
        let result = classify(&[note("a", Some(date(2024, 1, 1)), "RMN", &body)], &[]);
        let entry = &result.get("housing")[0];
        assert_eq!(entry.snippet.chars().count(), 151);
        assert!(entry.snippet.ends_with('…'));
        assert_eq!(entry.text, body);
    }

    #[test]
    fn community_episodes_do_not_open_windows() {
        let notes = vec![note("a", Some(date(2024, 1, 2)), "RMN", "Admitted to the crisis house.")];
        let episodes = vec![Episode {
            start: date(2024, 1, 1),
            end: None,
            kind: EpisodeKind::Community,
        }];
        assert!(classify(&notes, &episodes).is_empty());
    }

    #[test]
    fn no_rules_no_entries() {
        let notes = vec![note("a", Some(date(2024, 1, 1)), "RMN", "Housing meeting.")];
        let result = classify_notes(&notes, &[], &[], &NoteWindowConfig::default());
        assert!(result.is_empty());
    }
}
