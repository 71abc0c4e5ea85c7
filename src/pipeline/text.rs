//! Text primitives shared by the report and notes pipelines.
//!
//! Matching runs against a normalised working copy (straight quotes,
//! lowercase, collapsed whitespace) while every slice is taken from the
//! original string. `NormalizedText` keeps the byte mapping between the two.

/// Working copy of a string with a byte-level map back to the original.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    text: String,
    /// `offsets[i]` is the original byte offset of the char that produced
    /// working byte `i`. One trailing sentinel maps `text.len()` to the
    /// original length.
    offsets: Vec<usize>,
}

impl NormalizedText {
    /// Normalise quotes and case, collapsing every whitespace run to one space.
    pub fn new(original: &str) -> Self {
        Self::build(original, true)
    }

    /// Normalise quotes and case only; whitespace is kept verbatim.
    pub fn preserving_whitespace(original: &str) -> Self {
        Self::build(original, false)
    }

    fn build(original: &str, collapse_whitespace: bool) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut offsets = Vec::with_capacity(original.len() + 1);
        let mut in_whitespace = false;

        for (offset, ch) in original.char_indices() {
            if collapse_whitespace && ch.is_whitespace() {
                if !in_whitespace {
                    text.push(' ');
                    offsets.push(offset);
                }
                in_whitespace = true;
                continue;
            }
            in_whitespace = false;

            for lower in normalize_quote(ch).to_lowercase() {
                let start = text.len();
                text.push(lower);
                offsets.extend(std::iter::repeat(offset).take(text.len() - start));
            }
        }
        offsets.push(original.len());

        Self { text, offsets }
    }

    /// The normalised working text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Map a working byte offset back to the original string.
    pub fn original_offset(&self, working: usize) -> usize {
        let idx = working.min(self.offsets.len() - 1);
        self.offsets[idx]
    }

    /// First occurrence of an already-normalised needle, as an original offset.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.text.find(needle).map(|w| self.original_offset(w))
    }

    /// All occurrences of an already-normalised needle as `(start, end)`
    /// original offsets, in text order.
    pub fn find_all(&self, needle: &str) -> Vec<(usize, usize)> {
        if needle.is_empty() {
            return Vec::new();
        }
        self.text
            .match_indices(needle)
            .map(|(w, m)| (self.original_offset(w), self.original_offset(w + m.len())))
            .collect()
    }

    /// If the working text starts with `prefix` (after any leading space),
    /// return the original byte offset just past the matched prefix.
    pub fn strip_prefix_len(&self, prefix: &str) -> Option<usize> {
        let lead = self.text.len() - self.text.trim_start().len();
        if prefix.is_empty() || !self.text[lead..].starts_with(prefix) {
            return None;
        }
        Some(self.original_offset(lead + prefix.len()))
    }
}

/// Map typographic quotes onto their ASCII counterparts.
pub fn normalize_quote(ch: char) -> char {
    match ch {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '`' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
        _ => ch,
    }
}

/// Normalise a table phrase the same way `NormalizedText::new` normalises
/// haystacks: straight quotes, lowercase, single spaces, trimmed.
pub fn normalize_phrase(phrase: &str) -> String {
    NormalizedText::new(phrase.trim()).as_str().trim().to_string()
}

/// Case-insensitive whole-word containment. `haystack_lower` must already
/// be normalised; `keyword` is normalised here.
pub fn contains_keyword(haystack_lower: &str, keyword: &str) -> bool {
    let needle = normalize_phrase(keyword);
    if needle.is_empty() {
        return false;
    }
    haystack_lower.match_indices(needle.as_str()).any(|(start, m)| {
        let before = haystack_lower[..start].chars().next_back();
        let after = haystack_lower[start + m.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// First `max_chars` characters of `text`, with an ellipsis when truncated.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// Byte offset `max_chars` characters before `end` (clamped to 0).
pub fn chars_before(text: &str, end: usize, max_chars: usize) -> usize {
    text[..end]
        .char_indices()
        .rev()
        .take(max_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(end)
}
