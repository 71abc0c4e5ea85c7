//! Boilerplate and checkbox removal for one section span.
//!
//! Transforms run over the whole span (flattened text is often a single
//! line) and the full pipeline repeats until the text stops changing, so
//! cleaning already-cleaned text is a no-op.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::checkbox::{detect_checkbox, strip_checkboxes};
use crate::config::CleanerConfig;
use crate::models::Answer;
use crate::pipeline::fields::parse_yes_no;
use crate::pipeline::text::{normalize_phrase, NormalizedText};
use crate::schema::{SectionSchema, SUB_QUESTION_PHRASES};

static NUMERAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{1,2}\s*[.)](?:\s+|$)").expect("valid regex"));

static SUB_QUESTION_RESIDUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*yes\s*/\s*no\b[\s\-–—:,.]*(?:(?:if yes|if so)[,\s]*)?(?:please\s+)?(?:what are they|give details|explain(?:\s+why)?)?[\s?:.,;\-–—]*",
    )
    .expect("valid regex")
});

static DOUBLED_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(yes|no)[ \t]*/?[ \t]*(yes|no)(?:[ \t]*[?:.,;\-–—]+|[ \t]*\n|[ \t]*$)[\s?:.,;\-–—]*",
    )
    .expect("valid regex")
});

static SINGLE_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(yes|no|n/a|not applicable)(?:[ \t]*[?:.,;\-–—]+|[ \t]*\n|[ \t]*$)[\s?:.,;\-–—]*",
    )
    .expect("valid regex")
});

/// Procedural notices some templates paste into answer boxes.
static NOTICE_BLOCKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)if you (?:are of the view|consider) that [^.]{0,250}(?:should not be disclosed|would be likely to cause)[^.]{0,250}\.(?:\s*[^.]{0,250}\brule 14\b[^.]{0,250}\.)?",
        r"(?i)\bthe tribunal (?:may|will) (?:direct|make a direction)[^.]{0,250}\brule 14\b[^.]{0,250}\.",
        r"(?i)\bthis report (?:should|must) be (?:completed|prepared|written) by [^.]{0,250}\.",
        r"(?i)\bin accordance with (?:the )?practice direction[^.]{0,250}\.",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

const PLACEHOLDERS: &[&str] = &[
    "n/a",
    "na",
    "n.a",
    "nil",
    "see above",
    "as above",
    "see previous",
    "see previous report",
    "not applicable",
    "-",
    "--",
];

/// Cleaned body of a section plus any answer recovered from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedSection {
    pub text: String,
    pub answer: Option<Answer>,
}

/// Phrases shorter than this many words only count as a heading when
/// followed by `?`, `:` or a line end.
const MIN_BARE_HEADING_WORDS: usize = 6;

#[derive(Debug, Clone)]
struct HeadingPhrase {
    text: String,
    needs_terminator: bool,
}

/// Cleaner bound to one schema's heading phrase table.
#[derive(Debug, Clone)]
pub struct SectionTextCleaner {
    /// Normalised heading phrases, longest first.
    phrases: Vec<HeadingPhrase>,
    heading_tail: Regex,
    instruction: Regex,
    config: CleanerConfig,
}

impl SectionTextCleaner {
    pub fn for_schema(schema: &SectionSchema) -> Self {
        Self::with_config(schema, &CleanerConfig::default())
    }

    pub fn with_config(schema: &SectionSchema, config: &CleanerConfig) -> Self {
        // Locator fragments are excluded; they also open real answers.
        let mut texts: Vec<String> = schema
            .sections
            .iter()
            .flat_map(|s| s.heading_phrases.iter())
            .chain(SUB_QUESTION_PHRASES)
            .map(|p| {
                normalize_phrase(p)
                    .trim_end_matches(|c: char| matches!(c, '?' | ':' | '.' | ','))
                    .to_string()
            })
            .filter(|p| !p.is_empty())
            .collect();
        texts.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        texts.dedup();
        let phrases = texts
            .into_iter()
            .map(|text| HeadingPhrase {
                needs_terminator: text.split_whitespace().count() < MIN_BARE_HEADING_WORDS,
                text,
            })
            .collect();

        let (heading_tail, instruction) =
            match bounded_patterns(config.max_parenthetical_chars, config.max_instruction_chars) {
                Ok(patterns) => patterns,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        max_parenthetical_chars = config.max_parenthetical_chars,
                        max_instruction_chars = config.max_instruction_chars,
                        "Cleaner bounds unusable, falling back to defaults"
                    );
                    let defaults = CleanerConfig::default();
                    bounded_patterns(defaults.max_parenthetical_chars, defaults.max_instruction_chars)
                        .expect("valid regex")
                }
            };

        Self {
            phrases,
            heading_tail,
            instruction,
            config: config.clone(),
        }
    }

    /// Clean a raw section span. Never fails; steps that find nothing leave
    /// the text unchanged.
    pub fn clean(&self, raw: &str) -> CleanedSection {
        let mut text = raw.to_string();
        let mut answer = None;

        for _ in 0..self.config.max_passes {
            let (next, found) = self.pass(&text);
            answer = answer.or(found);
            if next == text {
                break;
            }
            text = next;
        }

        CleanedSection { text, answer }
    }

    fn pass(&self, input: &str) -> (String, Option<Answer>) {
        let text = NUMERAL_PREFIX.replace(input, "");

        let scan = detect_checkbox(&text);
        let text = strip_checkboxes(&text, &scan);

        let text = self.strip_headings(&text);
        let text = SUB_QUESTION_RESIDUE.replace(&text, "");
        let (text, token_answer) = self.strip_answer_token(&text);
        let text = self.instruction.replace(&text, "").into_owned();

        let text = NOTICE_BLOCKS
            .iter()
            .fold(text, |acc, re| re.replace_all(&acc, "").into_owned());

        let text = collapse_whitespace(&text);
        let text = if is_placeholder(&text) { String::new() } else { text };

        (text, scan.answer.or(token_answer))
    }

    /// Strip stacked heading phrases (main question, then sub-question)
    /// from the front of the text.
    fn strip_headings(&self, input: &str) -> String {
        let mut rest = input.trim_start();

        'outer: loop {
            let norm = NormalizedText::new(rest);
            for phrase in &self.phrases {
                let Some(end) = norm.strip_prefix_len(&phrase.text) else {
                    continue;
                };
                let after = &rest[end..];
                if after.chars().next().is_some_and(char::is_alphanumeric) {
                    continue;
                }
                if phrase.needs_terminator && !ends_heading(after) {
                    continue;
                }
                let tail = self.heading_tail.find(after).map(|m| m.end()).unwrap_or(0);
                rest = after[tail..].trim_start();
                continue 'outer;
            }
            break;
        }
        rest.to_string()
    }

    /// Strip a leading `Yes` / `No` (or doubled `Yes No`) token when the
    /// remaining content is long enough, or when nothing remains.
    fn strip_answer_token(&self, input: &str) -> (String, Option<Answer>) {
        let text = input.trim_start();

        let (matched_end, answer) = if let Some(caps) = DOUBLED_ANSWER.captures(text) {
            let first = parse_yes_no(&caps[1]);
            let second = parse_yes_no(&caps[2]);
            let answer = if first == second { first } else { None };
            (caps[0].len(), answer)
        } else if let Some(caps) = SINGLE_ANSWER.captures(text) {
            (caps[0].len(), parse_yes_no(&caps[1]))
        } else {
            return (input.to_string(), None);
        };

        let remainder = text[matched_end..].trim();
        let remaining_chars = remainder.chars().count();
        if remaining_chars == 0 || remaining_chars > self.config.min_content_after_answer {
            (remainder.to_string(), answer)
        } else {
            (input.to_string(), None)
        }
    }
}

/// Heading-tail and instruction patterns. Their bounds come from config,
/// so they are compiled per cleaner.
fn bounded_patterns(
    max_parenthetical_chars: usize,
    max_instruction_chars: usize,
) -> Result<(Regex, Regex), regex::Error> {
    let heading_tail = Regex::new(&format!(
        r"^[\s?:.,;\-–—]*(?:\([^()]{{0,{max_parenthetical_chars}}}\)[\s?:.,;\-–—]*)?"
    ))?;
    let instruction = Regex::new(&format!(
        r"(?i)^\s*(?:you should also|you should|please also|please include|please ensure|please comment on|please state)\b[^.?!:]{{0,{max_instruction_chars}}}[.?!:]\s*"
    ))?;
    Ok((heading_tail, instruction))
}

/// `?`, `:` or a line end directly after a short heading phrase.
fn ends_heading(after: &str) -> bool {
    match after.trim_start_matches([' ', '\t']).chars().next() {
        None | Some('?' | ':' | '\n' | '\r') => true,
        Some(_) => false,
    }
}

fn collapse_whitespace(text: &str) -> String {
    let spaced = HORIZONTAL_SPACE.replace_all(text, " ");
    let lines: Vec<&str> = spaced.lines().map(str::trim).collect();
    BLANK_LINES
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}

fn is_placeholder(text: &str) -> bool {
    let lowered = text.trim().trim_end_matches('.').to_lowercase();
    PLACEHOLDERS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{render_answer, ReportKind};

    fn cleaner() -> SectionTextCleaner {
        SectionTextCleaner::for_schema(SectionSchema::for_kind(ReportKind::Clinician))
    }

    const ADJUSTMENTS: &str = "3. Are there any adjustments that the tribunal may consider in order to deal with the case fairly and justly? ☒ Yes - Needs breaks during the hearing due to anxiety.";

    #[test]
    fn adjustments_example() {
        let out = cleaner().clean(ADJUSTMENTS);
        assert_eq!(out.answer, Some(Answer::Yes));
        assert_eq!(out.text, "Needs breaks during the hearing due to anxiety.");
    }

    #[test]
    fn typo_variant_heading_is_stripped() {
        let out = cleaner().clean(
            "Are there any adjustments that the tribunal may consider in order to deal with the case fairly and jusly? No",
        );
        assert_eq!(out.answer, Some(Answer::No));
        assert_eq!(out.text, "");
    }

    #[test]
    fn stacked_sub_question_and_parenthetical() {
        let out = cleaner().clean(
            "17. Give details of any incidents where the patient has harmed themselves or others, or threatened to harm themselves or others (include dates where known). If yes, please give details: Punched a wall on 3 March.",
        );
        assert_eq!(out.text, "Punched a wall on 3 March.");
        assert_eq!(out.answer, None);
    }

    #[test]
    fn residual_yes_no_sub_question() {
        let out = cleaner().clean(
            "Are there any factors that may affect the patient's understanding or ability to cope with a hearing? Yes/No - if yes, what are they? Hearing impairment, requires a loop system.",
        );
        assert_eq!(out.text, "Hearing impairment, requires a loop system.");
    }

    #[test]
    fn short_content_keeps_leading_token() {
        let out = cleaner().clean("No - see notes");
        assert_eq!(out.text, "No - see notes");
        assert_eq!(out.answer, None);
    }

    #[test]
    fn prose_starting_with_no_is_untouched() {
        let out = cleaner().clean("No history of violence recorded during this admission.");
        assert_eq!(out.text, "No history of violence recorded during this admission.");
        assert_eq!(out.answer, None);
    }

    #[test]
    fn answer_opening_with_section_keywords_is_kept() {
        let c = cleaner();
        let cases = [
            (
                "4. What is the patient's index offence(s) and other relevant forensic history? Index offence was robbery in 2010.",
                "Index offence was robbery in 2010.",
            ),
            (
                "26. What arrangements are in place for section 117 after-care? Section 117 after-care is funded jointly by health and social care.",
                "Section 117 after-care is funded jointly by health and social care.",
            ),
            (
                "Forensic history is limited to one caution in 2012.",
                "Forensic history is limited to one caution in 2012.",
            ),
            (
                "Damaged property on three occasions this year.",
                "Damaged property on three occasions this year.",
            ),
        ];
        for (raw, expected) in cases {
            assert_eq!(c.clean(raw).text, expected, "{raw}");
        }
    }

    #[test]
    fn short_heading_stripped_only_before_terminator() {
        let c = cleaner();
        assert_eq!(
            c.clean("Section 117 after-care: Funded jointly by health and social care.").text,
            "Funded jointly by health and social care."
        );
        assert_eq!(c.clean("Patient details\nFull name: John Smith").text, "Full name: John Smith");
        assert_eq!(
            c.clean("Strengths or positive factors include a supportive family.").text,
            "Strengths or positive factors include a supportive family."
        );
    }

    #[test]
    fn doubled_answer_needs_punctuation() {
        let out = cleaner().clean("Yes no further incidents occurred.");
        assert_eq!(out.text, "Yes no further incidents occurred.");
        assert_eq!(out.answer, None);

        let out = cleaner().clean("No No. Remains unwell on the ward.");
        assert_eq!(out.text, "Remains unwell on the ward.");
        assert_eq!(out.answer, Some(Answer::No));
    }

    #[test]
    fn oversized_bounds_fall_back_to_defaults() {
        let config = CleanerConfig {
            max_instruction_chars: 200_000,
            max_parenthetical_chars: 200_000,
            ..CleanerConfig::default()
        };
        let c = SectionTextCleaner::with_config(
            SectionSchema::for_kind(ReportKind::Clinician),
            &config,
        );
        let out = c.clean("Please include any recent leave. Escorted leave twice weekly.");
        assert_eq!(out.text, "Escorted leave twice weekly.");
    }

    #[test]
    fn dosage_is_not_a_numeral_prefix() {
        let out = cleaner().clean("10.5 mg olanzapine nightly");
        assert_eq!(out.text, "10.5 mg olanzapine nightly");
    }

    #[test]
    fn instruction_sentence_is_stripped() {
        let out = cleaner().clean(
            "You should also include any relevant risk history. He has been settled on the ward.",
        );
        assert_eq!(out.text, "He has been settled on the ward.");
    }

    #[test]
    fn notice_block_is_removed() {
        let out = cleaner().clean(
            "The tribunal may direct that information is withheld under rule 14 of the procedure rules. Settled since March.",
        );
        assert_eq!(out.text, "Settled since March.");
    }

    #[test]
    fn placeholders_collapse() {
        for raw in ["N/A", "see above", "As above.", "nil", "Not applicable"] {
            assert_eq!(cleaner().clean(raw).text, "", "{raw}");
        }
        assert_eq!(cleaner().clean("None").text, "None");
    }

    #[test]
    fn conflicting_ticks_pass_through() {
        let out = cleaner().clean("☒ Yes ☒ No Unclear from records");
        assert_eq!(out.answer, None);
        assert!(out.text.contains('☒'));
    }

    #[test]
    fn cleaning_is_idempotent() {
        let c = cleaner();
        let samples = [
            ADJUSTMENTS,
            "☐ Yes ☒ No",
            "12. What appropriate and available medical treatment has been prescribed, provided, offered or is planned for the patient's mental disorder? Clozapine 300mg.\n\n\nWeekly psychology.",
            "Yes [X] No [ ] He would benefit from a familiar advocate.",
            "No x - settled on the ward for six weeks",
            "plain text",
        ];
        for raw in samples {
            let once = c.clean(raw);
            let twice = c.clean(&once.text);
            assert_eq!(twice.text, once.text, "{raw}");
        }
    }

    #[test]
    fn rendered_answer_round_trips() {
        let c = cleaner();
        let once = c.clean(ADJUSTMENTS);
        let again = c.clean(&render_answer(once.answer, &once.text));
        assert_eq!(again, once);

        let heading = "Are there any adjustments that the tribunal may consider in order to deal with the case fairly and justly?";
        let reprefixed = format!("3. {heading} ☒ Yes - {}", once.text);
        assert_eq!(c.clean(&reprefixed), once);
    }

    #[test]
    fn nursing_headings_use_their_own_table() {
        let c = SectionTextCleaner::for_schema(SectionSchema::for_kind(ReportKind::Nursing));
        let out = c.clean("5. What is the patient's current level of observation? General observations.");
        assert_eq!(out.text, "General observations.");
    }
}
