//! Food extraction
//!
//! Splits an utterance into food phrases, strips verbs and filler, and
//! resolves each phrase against the catalog.

use std::sync::LazyLock;

use regex::Regex;

use super::quantity::extract_quantity;
use super::segment::{
    contains_word, remove_matches, split_fragments, word_set_regex, FOOD_SEPARATORS,
};
use super::temporal::strip_date_phrases;
use crate::catalog::data::RESTAURANTS;
use crate::catalog::{catalog, find_food};
use crate::models::{FoodItem, ParsedFood};

/// Eating/drinking phrases removed wherever they occur. Longer phrases come
/// first so they win over their own suffixes.
static ACTION_PHRASES: &[&str] = &[
    "i just ate",
    "i just had",
    "i just drank",
    "i just finished",
    "just ate",
    "just had",
    "just drank",
    "i ate",
    "i had",
    "i drank",
    "i consumed",
    "i grabbed",
    "i ordered",
    "i got",
    "for breakfast",
    "for lunch",
    "for dinner",
    "for a snack",
    "ate",
    "had",
    "drank",
    "consumed",
    "grabbed",
    "ordered",
    "eating",
    "drinking",
];

static ACTION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| word_set_regex(ACTION_PHRASES));

static FILLER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| word_set_regex(&["a", "an", "the", "of", "just", "some", "i"]));

/// Catalog keys that span a separator ("mac and cheese"), longest first
static COMPOUND_KEYS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let keys = catalog().keys_containing_any(FOOD_SEPARATORS);
    if keys.is_empty() {
        None
    } else {
        word_set_regex(&keys)
    }
});

/// Stands in for spaces inside compound keys while the text is split
const COMPOUND_JOINER: &str = "_";

/// Size words and the catalog prefix they map to
static SIZE_MODIFIERS: &[(&str, &str)] = &[
    ("small", "small"),
    ("medium", "medium"),
    ("large", "large"),
    ("big", "large"),
];

/// Extract every catalog food mentioned in lowercased text
pub fn extract_foods(text: &str) -> Vec<ParsedFood> {
    let text = join_compound_keys(&strip_date_phrases(&strip_restaurant(text)));

    split_fragments(&text, FOOD_SEPARATORS)
        .iter()
        .filter_map(|fragment| parse_fragment(fragment))
        .collect()
}

/// Remove the first restaurant phrase found, if any
fn strip_restaurant(text: &str) -> String {
    match RESTAURANTS.iter().find(|name| text.contains(*name)) {
        Some(name) => text.replacen(name, " ", 1),
        None => text.to_string(),
    }
}

/// Glue compound keys together so the separator inside them survives splitting
fn join_compound_keys(text: &str) -> String {
    match COMPOUND_KEYS.as_ref() {
        Some(re) => re
            .replace_all(text, |caps: &regex::Captures| {
                caps[0].replace(' ', COMPOUND_JOINER)
            })
            .into_owned(),
        None => text.to_string(),
    }
}

fn parse_fragment(fragment: &str) -> Option<ParsedFood> {
    if contains_word(fragment, "water") && !contains_word(fragment, "food") {
        return None;
    }

    let without_verbs = remove_matches(fragment, ACTION_PATTERN.as_ref());
    let (quantity, residual) = extract_quantity(&without_verbs);
    let (size, residual) = split_size(&residual);
    let name = remove_matches(&residual, FILLER_PATTERN.as_ref()).replace(COMPOUND_JOINER, " ");

    if name.chars().count() < 2 || name == "water" {
        return None;
    }

    match resolve(&name, size) {
        Some(item) => Some(ParsedFood {
            name: item.name.to_string(),
            quantity,
            macros: item.macros_for(quantity),
        }),
        None => {
            tracing::debug!(fragment = %fragment, candidate = %name, "No catalog match; dropping fragment");
            None
        }
    }
}

/// Split a leading size word off the phrase. Phrases that already name a
/// sized catalog entry ("big mac", "large fries") are left whole.
fn split_size(text: &str) -> (Option<&'static str>, String) {
    let mut words = text.splitn(2, ' ');
    let first = words.next().unwrap_or_default();
    let rest = words.next().unwrap_or_default().trim();

    let Some((word, prefix)) = SIZE_MODIFIERS.iter().find(|(word, _)| *word == first) else {
        return (None, text.to_string());
    };

    if catalog().contains_key_starting_with(text, word) {
        return (None, text.to_string());
    }

    (Some(*prefix), rest.to_string())
}

/// Resolve a cleaned phrase: sized name, then fries fallbacks, then the bare name
fn resolve(name: &str, size: Option<&str>) -> Option<&'static FoodItem> {
    if let Some(size) = size {
        if let Some(item) = find_food(&format!("{} {}", size, name)) {
            return Some(item);
        }
    } else if let Some(item) = find_food(name) {
        return Some(item);
    }

    if name.contains("fry") || name.contains("fries") {
        if let Some(size) = size {
            if let Some(item) = find_food(&format!("{} fries", size)) {
                return Some(item);
            }
        }
        if let Some(item) = find_food("fries") {
            return Some(item);
        }
    }

    size.and_then(|_| find_food(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(foods: &[ParsedFood]) -> Vec<&str> {
        foods.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_single_food() {
        let foods = extract_foods("i ate a banana");
        assert_eq!(names(&foods), vec!["Banana"]);
        assert!((foods[0].quantity - 1.0).abs() < 0.001);
        assert_eq!(foods[0].macros.calories, 105);
    }

    #[test]
    fn test_multiple_foods_and_quantities() {
        let foods = extract_foods("had 2 eggs, toast and a coffee");
        assert_eq!(names(&foods), vec!["Egg", "Bread", "Coffee"]);
        assert!((foods[0].quantity - 2.0).abs() < 0.001);
        assert_eq!(foods[0].macros.calories, 156);
    }

    #[test]
    fn test_large_fries_before_default_fries() {
        let foods = extract_foods("large fries");
        assert_eq!(names(&foods), vec!["Large Fries"]);
        assert_eq!(foods[0].macros.calories, 510);

        let foods = extract_foods("fries");
        assert_eq!(foods[0].macros.calories, 320);
    }

    #[test]
    fn test_fry_falls_back_to_sized_fries() {
        assert_eq!(names(&extract_foods("a small fry")), vec!["Small Fries"]);
        assert_eq!(names(&extract_foods("a large fry")), vec!["Large Fries"]);
        assert_eq!(names(&extract_foods("some curly fry")), vec!["Medium Fries"]);
    }

    #[test]
    fn test_big_is_large_except_in_big_mac() {
        assert_eq!(names(&extract_foods("a big mac")), vec!["Big Mac"]);
        assert_eq!(names(&extract_foods("2 big macs")), vec!["Big Mac"]);
        assert_eq!(names(&extract_foods("big fries")), vec!["Large Fries"]);
    }

    #[test]
    fn test_sized_name_without_sized_entry() {
        assert_eq!(names(&extract_foods("a large coke")), vec!["Coca-Cola"]);
    }

    #[test]
    fn test_quantity_doubles_macros_exactly() {
        let one = extract_foods("1 cheeseburger");
        let two = extract_foods("2 cheeseburgers");
        assert_eq!(two[0].macros, one[0].macros + one[0].macros);
    }

    #[test]
    fn test_restaurant_name_is_stripped() {
        let foods = extract_foods("a whopper from burger king");
        assert_eq!(names(&foods), vec!["Whopper"]);

        let foods = extract_foods("a turkey sub from subway");
        assert_eq!(names(&foods), vec!["Turkey Sub"]);
    }

    #[test]
    fn test_water_fragments_are_skipped() {
        assert!(extract_foods("drank 3 glasses of water").is_empty());
        assert!(extract_foods("water").is_empty());
    }

    #[test]
    fn test_water_inside_a_word_is_not_water() {
        // no catalog entry, but the fragment must still reach the matcher
        let foods = extract_foods("a cheeseburger with watermelon");
        assert_eq!(names(&foods), vec!["Cheeseburger"]);
        assert!(parse_fragment("watermelon").is_none());
        assert!(parse_fragment("bottle of water").is_none());
    }

    #[test]
    fn test_compound_keys_survive_splitting() {
        assert_eq!(names(&extract_foods("ate mac and cheese")), vec!["Mac and Cheese"]);
        assert_eq!(
            names(&extract_foods("had macaroni and cheese with a coke")),
            vec!["Mac and Cheese", "Coca-Cola"]
        );
        assert_eq!(
            names(&extract_foods("2 burgers and cheese")),
            vec!["Hamburger", "Cheese"]
        );
    }

    #[test]
    fn test_date_phrases_are_not_quantities() {
        let foods = extract_foods("2 days ago i ate an apple");
        assert_eq!(names(&foods), vec!["Apple"]);
        assert!((foods[0].quantity - 1.0).abs() < 0.001);

        let foods = extract_foods("12 days ago ate an apple");
        assert!((foods[0].quantity - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_action_verbs_anywhere_in_fragment() {
        let foods = extract_foods("for lunch i had pizza");
        assert_eq!(names(&foods), vec!["Pizza"]);
    }

    #[test]
    fn test_verbs_inside_words_are_kept() {
        // "ate" inside "chocolate" must survive verb stripping
        let foods = extract_foods("a chocolate milkshake");
        assert_eq!(names(&foods), vec!["Chocolate Milkshake"]);
    }

    #[test]
    fn test_unmatched_fragments_are_dropped() {
        assert!(extract_foods("i ate unobtainium surprise").is_empty());
        assert!(extract_foods("ran 3 miles in 30 minutes").is_empty());
        assert!(extract_foods("did 3 sets of 12 squats").is_empty());
        assert!(extract_foods("").is_empty());
    }

    #[test]
    fn test_fractional_servings() {
        let foods = extract_foods("half a pizza");
        assert_eq!(names(&foods), vec!["Pizza"]);
        assert!((foods[0].quantity - 0.5).abs() < 0.001);
        assert_eq!(foods[0].macros.calories, 142);
    }
}
