//! Quantity extraction
//!
//! Pulls a serving multiplier out of a food phrase and returns what is left.

use std::sync::LazyLock;

use regex::Regex;

use super::segment::{collapse_whitespace, word_set_regex};

/// Quantity used when a phrase carries no number
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Digits, decimals or a simple fraction, captured as one group
pub(crate) const NUMBER: &str = r"(\d+/\d+|\d+(?:\.\d+)?)";

/// Numeric patterns in priority order. The unit only gates the match; it is
/// not an extra scaling factor.
static NUMERIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b{N}\s*cups?\b",
        r"\b{N}\s*glass(?:es)?\b",
        r"\b{N}\s*pieces?\b",
        r"\b{N}\s*slices?\b",
        r"\b{N}\s*(?:oz|ounces?)\b",
        r"\b{N}\b",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(&pattern.replace("{N}", NUMBER)).ok())
    .collect()
});

static NUMBER_WORDS: &[(&str, f64)] = &[
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("a", 1.0),
    ("an", 1.0),
    ("half", 0.5),
    ("quarter", 0.25),
];

static NUMBER_WORD_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let words: Vec<&str> = NUMBER_WORDS.iter().map(|(word, _)| *word).collect();
    word_set_regex(&words)
});

/// Extract `(quantity, residual)` from a food phrase.
///
/// Digits (including decimals and simple fractions) win over number words;
/// among number words the earliest one in the text is used. With neither,
/// the quantity is 1.0 and the text comes back trimmed.
pub fn extract_quantity(fragment: &str) -> (f64, String) {
    let text = fragment.trim();

    for pattern in NUMERIC_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let residual = remove_range(text, whole.start(), whole.end());
            let quantity = parse_number(number.as_str())
                .filter(|q| q.is_finite() && *q > 0.0)
                .unwrap_or(DEFAULT_QUANTITY);
            return (quantity, residual);
        }
    }

    if let Some(re) = NUMBER_WORD_PATTERN.as_ref() {
        if let Some(m) = re.find(text) {
            let quantity = NUMBER_WORDS
                .iter()
                .find(|(word, _)| *word == m.as_str())
                .map(|(_, value)| *value)
                .unwrap_or(DEFAULT_QUANTITY);
            return (quantity, remove_range(text, m.start(), m.end()));
        }
    }

    (DEFAULT_QUANTITY, text.to_string())
}

/// Compile "<number> <unit>" with the number anchored at a word start, so
/// "1/2 mile" captures "1/2" rather than the denominator
pub(crate) fn number_with_unit(unit: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{}\s*{}", NUMBER, unit)).ok()
}

/// Parse "2", "1.5" or "1/2"
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    match s.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.parse().ok()?;
            let den: f64 = den.parse().ok()?;
            if den == 0.0 {
                None
            } else {
                Some(num / den)
            }
        }
        None => s.parse().ok(),
    }
}

fn remove_range(text: &str, start: usize, end: usize) -> String {
    collapse_whitespace(&format!("{} {}", &text[..start], &text[end..]))
}
