//! Structured parsing of raw model output.
//!
//! Extraction never fails: whatever the model produced, both fields come
//! back populated, degrading per the rules in [`parse`].

use std::sync::LazyLock;

use regex::Regex;

use crate::prompt::ANSWER_MARKER;

/// Placeholder scratchpad when the model emitted no reasoning block.
pub const NO_REASONING_PLACEHOLDER: &str = "[no reasoning trace found]";

static SCRATCHPAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<scratchpad>.*?</scratchpad>").expect("scratchpad pattern is valid")
});

/// The two fields extracted from a raw model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// The reasoning block, delimiters included, or
    /// [`NO_REASONING_PLACEHOLDER`].
    pub scratchpad: String,
    /// The final answer text, trimmed.
    pub answer: String,
}

/// Extract scratchpad and answer from raw model output.
///
/// 1. The first `<scratchpad>…</scratchpad>` block becomes the scratchpad
///    (delimiters kept, so callers see exactly what the model wrote);
///    absent one, the placeholder is used.
/// 2. The answer is the trimmed text after the first [`ANSWER_MARKER`] at
///    or past the scratchpad close (the whole text is searched when there
///    is no scratchpad).
/// 3. Without a marker, the answer falls back to the raw text with the
///    scratchpad block removed and trimmed, so any model output at all
///    yields a non-empty answer.
pub fn parse(raw: &str) -> ParsedResponse {
    let block = SCRATCHPAD_RE.find(raw);

    let scratchpad = match block {
        Some(m) => m.as_str().to_string(),
        None => NO_REASONING_PLACEHOLDER.to_string(),
    };

    let search_from = block.map(|m| m.end()).unwrap_or(0);
    let answer = match raw[search_from..].find(ANSWER_MARKER) {
        Some(pos) => raw[search_from + pos + ANSWER_MARKER.len()..].trim().to_string(),
        None => {
            let mut stripped = String::with_capacity(raw.len());
            match block {
                Some(m) => {
                    stripped.push_str(&raw[..m.start()]);
                    stripped.push_str(&raw[m.end()..]);
                }
                None => stripped.push_str(raw),
            }
            stripped.trim().to_string()
        }
    };

    ParsedResponse { scratchpad, answer }
}
