//! Fragment splitting and word matching helpers
//!
//! Shared by the food and workout extractors.

use regex::Regex;

/// Conjunctions that separate food phrases, applied in this order
pub const FOOD_SEPARATORS: &[&str] = &[" and ", ", ", " plus ", " with "];

/// Workout phrases additionally split on sequencing words
pub const WORKOUT_SEPARATORS: &[&str] = &[" and ", ", ", " plus ", " with ", " then "];

/// Split text on each separator in turn, every pass applying to all
/// fragments produced by the previous one. Empty fragments are dropped.
pub fn split_fragments(text: &str, separators: &[&str]) -> Vec<String> {
    let mut fragments = vec![text.to_string()];

    for separator in separators {
        fragments = fragments
            .iter()
            .flat_map(|fragment| fragment.split(separator))
            .map(str::to_string)
            .collect();
    }

    fragments
        .iter()
        .map(|fragment| trim_fragment(fragment))
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim whitespace and sentence punctuation from both ends
pub fn trim_fragment(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '!' | '?' | ';' | ':'))
}

/// Collapse runs of whitespace into single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True if `word` occurs in `text` as a whole word (or phrase)
pub fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    text.match_indices(word).any(|(start, _)| {
        let end = start + word.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

/// True if any of the words occurs in `text` as a whole word
pub fn contains_any_word(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| contains_word(text, word))
}

/// Compile a whole-word alternation. Alternatives are tried in slice order
/// at each position, so longer phrases sharing a prefix must come first.
pub fn word_set_regex(words: &[&str]) -> Option<Regex> {
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).ok()
}

/// Remove every match of `pattern` and tidy the remaining whitespace
pub fn remove_matches(text: &str, pattern: Option<&Regex>) -> String {
    match pattern {
        Some(re) => collapse_whitespace(&re.replace_all(text, " ")),
        None => collapse_whitespace(text),
    }
}
