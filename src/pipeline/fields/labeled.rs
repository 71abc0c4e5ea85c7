use std::collections::BTreeMap;

use crate::pipeline::text::{normalize_phrase, NormalizedText};

const VALUE_LEAD: &[char] = &[':', '-', '–', '—', '=', ',', ';', '.'];
const VALUE_TAIL: &[char] = &[',', ';'];

#[derive(Debug, Clone, Copy)]
struct LabelHit<'a> {
    label: &'a str,
    start: usize,
    end: usize,
}

/// Split `text` into `label → value` using the first occurrence of each
/// label (case-insensitive, whole word).
///
/// Each value runs from the end of its label to the start of the next
/// located label, or to the end of the text. A label hit nested inside an
/// earlier, longer hit is ignored. Labels that are not found, or whose value
/// is empty, are absent from the result.
pub fn split_labeled_fields(text: &str, labels: &[&str]) -> BTreeMap<String, String> {
    let norm = NormalizedText::new(text);

    let mut hits: Vec<LabelHit> = labels
        .iter()
        .filter_map(|&label| {
            locate_label(text, &norm, label).map(|(start, end)| LabelHit { label, start, end })
        })
        .collect();
    // Earliest first; at the same start the longer label wins.
    hits.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut kept: Vec<LabelHit> = Vec::with_capacity(hits.len());
    for hit in hits {
        if kept.last().is_some_and(|last| hit.start < last.end) {
            continue;
        }
        kept.push(hit);
    }

    let mut fields = BTreeMap::new();
    for (i, hit) in kept.iter().enumerate() {
        let value_end = kept.get(i + 1).map(|next| next.start).unwrap_or(text.len());
        let value = text[hit.end..value_end]
            .trim_start_matches(|c: char| c.is_whitespace() || VALUE_LEAD.contains(&c))
            .trim_end_matches(|c: char| c.is_whitespace() || VALUE_TAIL.contains(&c));
        if !value.is_empty() {
            fields.insert(hit.label.to_string(), value.to_string());
        }
    }
    fields
}

/// First whole-word occurrence of `label`. An occurrence followed by a
/// colon is preferred, since that is how form labels are written.
fn locate_label(text: &str, norm: &NormalizedText, label: &str) -> Option<(usize, usize)> {
    let needle = normalize_phrase(label);
    let candidates: Vec<(usize, usize)> = norm
        .find_all(&needle)
        .into_iter()
        .filter(|&(start, end)| is_word_bounded(text, start, end))
        .collect();

    candidates
        .iter()
        .copied()
        .find(|&(_, end)| text[end..].trim_start().starts_with(':'))
        .or_else(|| candidates.first().copied())
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
