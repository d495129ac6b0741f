// src/plain.rs
//
// Sentence truncation for plain text, as a single regular expression.
//
// A sentence is the shortest run that contains a word of three or more word
// characters and then one of:
//   • digit + terminator + non-digit      ("costs 3. Then")
//   • non-digit + terminator + whitespace ("fine. Next")
//   • a newline, or the end of the text
// so "4.50" never splits. Matches stop at line ends.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE: Lazy<Regex> = Lazy::new(|| {
    // Regex is a hard-coded literal; abort if it ever fails to compile.
    Regex::new(r".*?\w{3,}?.*?(?:\d[.!?]\D|\D[.!?]\s|\n|$)")
        .unwrap_or_else(|_| std::process::abort())
});

/// Keep the first `sentence_count` sentences of `text`, trimmed.
/// Non-positive counts yield an empty string.
pub fn truncate_plain(text: &str, sentence_count: i64) -> String {
    let budget = match usize::try_from(sentence_count) {
        Ok(budget) if budget > 0 => budget,
        _ => return String::new(),
    };

    let kept: String = SENTENCE
        .find_iter(text.trim())
        .take(budget)
        .map(|m| m.as_str())
        .collect();
    kept.trim().to_owned()
}
