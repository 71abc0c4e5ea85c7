use std::sync::LazyLock;

use regex::Regex;

use super::clean::SectionTextCleaner;
use crate::config::EngineConfig;
use crate::models::{ParsedSection, SectionSpan};
use crate::pipeline::text::{chars_before, normalize_phrase, NormalizedText};
use crate::schema::{SectionSchema, SectionSpec};

static SECTION_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\.").expect("valid regex"));

#[derive(Debug, Clone, Copy)]
struct Hit {
    spec: &'static SectionSpec,
    pos: usize,
}

/// Locate section boundaries in flattened report text.
///
/// Spans are sliced from the original `text`, never overlap, and come out
/// in ascending section-number order. Sections whose heading is not found
/// are omitted.
pub fn segment_report(
    text: &str,
    schema: &SectionSchema,
    lookback_chars: usize,
) -> Vec<SectionSpan> {
    let norm = NormalizedText::new(text);

    let mut hits: Vec<Hit> = schema
        .sections
        .iter()
        .filter_map(|spec| {
            locate_section(text, &norm, spec, lookback_chars).map(|pos| Hit { spec, pos })
        })
        .collect();
    hits.sort_by(|a, b| a.pos.cmp(&b.pos).then(a.spec.number.cmp(&b.spec.number)));

    let kept = longest_numbered_run(&hits);
    if kept.len() < hits.len() {
        tracing::debug!(
            located = hits.len(),
            kept = kept.len(),
            "Dropped out-of-order section headings"
        );
    }

    kept.iter()
        .enumerate()
        .map(|(i, hit)| {
            let end = kept.get(i + 1).map(|next| next.pos).unwrap_or(text.len());
            SectionSpan {
                section_id: hit.spec.id.to_string(),
                number: hit.spec.number,
                start: hit.pos,
                end,
                raw: text[hit.pos..end].to_string(),
            }
        })
        .collect()
}

/// Segment then clean every span.
pub fn parse_report(
    text: &str,
    schema: &SectionSchema,
    config: &EngineConfig,
) -> Vec<ParsedSection> {
    let cleaner = SectionTextCleaner::with_config(schema, &config.cleaner);

    segment_report(text, schema, config.segmenter.lookback_chars)
        .into_iter()
        .filter_map(|span| {
            let spec = schema.section(&span.section_id)?;
            let cleaned = cleaner.clean(&span.raw);
            Some(ParsedSection {
                section_id: span.section_id,
                number: span.number,
                kind: spec.kind,
                raw_span: span.raw,
                cleaned_text: cleaned.text,
                detected_answer: cleaned.answer,
            })
        })
        .collect()
}

/// Boundary for one section: the first numeral-anchored fragment
/// occurrence, else the first occurrence of the earliest-listed fragment.
fn locate_section(
    text: &str,
    norm: &NormalizedText,
    spec: &SectionSpec,
    lookback_chars: usize,
) -> Option<usize> {
    let mut first_unanchored = None;

    for fragment in spec.heading_fragments {
        let occurrences = norm.find_all(&normalize_phrase(fragment));
        for &(start, _) in &occurrences {
            if let Some(anchor) = find_anchor(text, start, spec.number, lookback_chars) {
                return Some(anchor);
            }
        }
        if first_unanchored.is_none() {
            first_unanchored = occurrences.first().map(|&(start, _)| start);
        }
    }
    first_unanchored
}

/// Closest `<number>.` within `lookback_chars` before `fragment_start`.
fn find_anchor(
    text: &str,
    fragment_start: usize,
    number: u8,
    lookback_chars: usize,
) -> Option<usize> {
    let window_start = chars_before(text, fragment_start, lookback_chars);
    let window = &text[window_start..fragment_start];

    SECTION_NUMERAL
        .captures_iter(window)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let start = window_start + whole.start();
            let end = window_start + whole.end();
            let preceded_by_digit = text[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit());
            let followed_by_digit = text[end..].chars().next().is_some_and(|c| c.is_ascii_digit());
            let matches_number = caps[1].parse::<u8>().ok() == Some(number);
            (matches_number && !preceded_by_digit && !followed_by_digit).then_some(start)
        })
        .last()
}

/// Largest subset of position-ordered hits whose section numbers strictly
/// increase. Ties prefer earlier hits.
fn longest_numbered_run(hits: &[Hit]) -> Vec<Hit> {
    if hits.is_empty() {
        return Vec::new();
    }

    let mut best_len = vec![1usize; hits.len()];
    let mut prev: Vec<Option<usize>> = vec![None; hits.len()];
    for i in 0..hits.len() {
        for j in 0..i {
            if hits[j].spec.number < hits[i].spec.number && best_len[j] + 1 > best_len[i] {
                best_len[i] = best_len[j] + 1;
                prev[i] = Some(j);
            }
        }
    }

    let mut tail = 0;
    for i in 1..hits.len() {
        if best_len[i] > best_len[tail] {
            tail = i;
        }
    }

    let mut run = Vec::with_capacity(best_len[tail]);
    let mut cursor = Some(tail);
    while let Some(i) = cursor {
        run.push(hits[i]);
        cursor = prev[i];
    }
    run.reverse();
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, ReportKind};

    fn clinician() -> &'static SectionSchema {
        SectionSchema::for_kind(ReportKind::Clinician)
    }

    const REPORT: &str = "Responsible clinician's report. \
        1. Patient details Full name: John Smith \
        2. Are there any factors that may affect the patient's understanding or ability to cope with a hearing? ☐ Yes ☒ No \
        3. Are there any adjustments that the tribunal may consider in order to deal with the case fairly and justly? ☒ Yes - Needs breaks during the hearing due to anxiety. \
        4. What is the patient's index offence(s) and other relevant forensic history? Assault in 2015, no further offences. \
        8. Is the patient now suffering from a mental disorder? Yes - paranoid schizophrenia, relapsing. \
        26. What arrangements are in place for section 117 after-care? Care coordinator allocated.";

    #[test]
    fn sections_in_number_order_and_contiguous() {
        let spans = segment_report(REPORT, clinician(), 30);
        let ids: Vec<&str> = spans.iter().map(|s| s.section_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "patient_details",
                "factors_hearing",
                "adjustments",
                "forensic_history",
                "mental_disorder",
                "s117_aftercare"
            ]
        );
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].number < pair[1].number);
        }
        assert_eq!(spans.last().unwrap().end, REPORT.len());
    }

    #[test]
    fn boundaries_anchor_on_numerals() {
        let spans = segment_report(REPORT, clinician(), 30);
        assert!(spans[2].raw.starts_with("3. Are there any adjustments"));
        assert!(spans[5].raw.starts_with("26. What arrangements"));
    }

    #[test]
    fn missing_sections_are_omitted() {
        let spans = segment_report(REPORT, clinician(), 30);
        assert!(spans.iter().all(|s| s.section_id != "diagnosis"));
        assert!(segment_report("Nothing recognisable here.", clinician(), 30).is_empty());
    }

    #[test]
    fn repeated_fragment_later_in_text_is_ignored() {
        let text = "24. Is there any reason why the patient's nearest relative should not be informed of the hearing? No. \
            25. What are the views of the patient's nearest relative, if known? Supportive. \
            She asked whether the nearest relative should not be informed of future hearings.";
        let spans = segment_report(text, clinician(), 30);
        let ids: Vec<&str> = spans.iter().map(|s| s.section_id.as_str()).collect();
        assert_eq!(ids, vec!["nearest_relative_informed", "nearest_relative_views"]);
        assert!(spans[1].raw.contains("future hearings"));
    }

    #[test]
    fn anchored_occurrence_beats_earlier_mention() {
        let text = "Intro: the index offence is discussed below. \
            4. What is the patient's index offence(s) and other relevant forensic history? Robbery.";
        let spans = segment_report(text, clinician(), 30);
        assert_eq!(spans.len(), 1);
        assert!(spans[0].raw.starts_with("4. What is"));
    }

    #[test]
    fn spaced_numeral_is_not_an_anchor() {
        let text = "Intro. 4 . What is the patient's index offence(s) and other relevant forensic history? Robbery.";
        let spans = segment_report(text, clinician(), 30);
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].raw.starts_with('4'));
        assert!(spans[0].raw.contains("Robbery."));
    }

    #[test]
    fn out_of_order_stray_heading_is_dropped() {
        let text = "1. Patient details Name: A. \
            29. Is there any other relevant information that the tribunal should know? None. \
            2. Are there any factors that may affect the patient's understanding or ability to cope with a hearing? No. \
            3. Are there any adjustments that the tribunal may consider in order to deal with the case fairly and justly? No.";
        let spans = segment_report(text, clinician(), 30);
        let numbers: Vec<u8> = spans.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn parse_report_cleans_each_span() {
        let sections = parse_report(REPORT, clinician(), &EngineConfig::default());
        let adjustments = sections.iter().find(|s| s.section_id == "adjustments").unwrap();
        assert_eq!(adjustments.detected_answer, Some(Answer::Yes));
        assert_eq!(adjustments.cleaned_text, "Needs breaks during the hearing due to anxiety.");

        let factors = sections.iter().find(|s| s.section_id == "factors_hearing").unwrap();
        assert_eq!(factors.detected_answer, Some(Answer::No));
        assert_eq!(factors.cleaned_text, "");

        let forensic = sections.iter().find(|s| s.section_id == "forensic_history").unwrap();
        assert_eq!(forensic.cleaned_text, "Assault in 2015, no further offences.");
    }
}
