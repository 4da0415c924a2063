//! Water intake extraction

use std::sync::LazyLock;

use regex::Regex;

use super::quantity::{number_with_unit, parse_number};
use super::segment::{contains_word, word_set_regex};
use crate::models::ParsedWater;
use crate::units::{glasses_to_ounces, OZ_PER_GLASS};

static OUNCES_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| number_with_unit(r"(?:oz|ounces?)\b"));

static GLASSES_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| number_with_unit(r"glass(?:es)?\b"));

/// Phrases that mention water as the thing consumed
static WATER_PHRASES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    word_set_regex(&["drank water", "had water", "drinking water", "drink water"])
});

/// Verbs that suggest the water mention belongs to a food sentence
static OTHER_CONSUMPTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| word_set_regex(&["ate", "had", "consumed"]));

/// Extract the total water intake from lowercased text
pub fn extract_water(text: &str) -> Option<ParsedWater> {
    if !contains_word(text, "water") {
        return None;
    }

    if let Some(ounces) = sum_captures(OUNCES_PATTERN.as_ref(), text) {
        let ounces = ounces.round();
        if ounces >= 1.0 {
            return Some(ParsedWater {
                ounces: ounces.min(u32::MAX as f64) as u32,
            });
        }
    }

    if let Some(glasses) = sum_captures(GLASSES_PATTERN.as_ref(), text) {
        let ounces = glasses_to_ounces(glasses);
        if ounces > 0 {
            return Some(ParsedWater { ounces });
        }
    }

    // Bare mention: ignore the verb that is part of the water phrase itself
    let without_water_phrases = match WATER_PHRASES.as_ref() {
        Some(re) => re.replace_all(text, " ").into_owned(),
        None => text.to_string(),
    };
    let incidental = OTHER_CONSUMPTION
        .as_ref()
        .is_some_and(|re| re.is_match(&without_water_phrases));

    if incidental {
        tracing::debug!(text = %text, "Water mentioned alongside food verbs; not logging default glass");
        return None;
    }

    Some(ParsedWater {
        ounces: OZ_PER_GLASS,
    })
}

/// Sum every numeric capture of the pattern; None when nothing matched
fn sum_captures(pattern: Option<&Regex>, text: &str) -> Option<f64> {
    let re = pattern?;
    let amounts: Vec<f64> = re
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| parse_number(m.as_str()))
        .filter(|n| n.is_finite() && *n > 0.0)
        .collect();

    if amounts.is_empty() {
        None
    } else {
        Some(amounts.iter().sum())
    }
}
