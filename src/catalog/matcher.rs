//! Food catalog lookup
//!
//! One lookup structure over canonical keys, aliases and synonyms, searched
//! in a fixed priority order:
//!
//! 1. exact key
//! 2. longest key contained in the query
//! 3. longest key that contains the query
//! 4. synonym table, then exact key
//!
//! Substring hits in steps 2 and 3 must start on a word boundary.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::data::{FOODS, SYNONYMS};
use crate::models::FoodItem;

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(FOODS, SYNONYMS));

/// Get the process-wide food catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Find the best catalog entry for a free-text query
pub fn find_food(query: &str) -> Option<&'static FoodItem> {
    CATALOG.find(query)
}

/// Indexed view over a static food table
pub struct Catalog {
    items: &'static [FoodItem],
    exact: HashMap<&'static str, usize>,
    /// All keys, longest first; equal lengths keep table order
    by_length: Vec<(&'static str, usize)>,
    synonyms: &'static [(&'static str, &'static str)],
}

impl Catalog {
    pub fn new(
        items: &'static [FoodItem],
        synonyms: &'static [(&'static str, &'static str)],
    ) -> Self {
        let mut exact = HashMap::new();
        let mut by_length = Vec::new();

        for (idx, item) in items.iter().enumerate() {
            for key in item.keys {
                // First entry to claim a key keeps it
                exact.entry(*key).or_insert(idx);
                by_length.push((*key, idx));
            }
        }

        // Stable sort keeps declaration order among equal lengths
        by_length.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self {
            items,
            exact,
            by_length,
            synonyms,
        }
    }

    /// All entries in table order
    pub fn items(&self) -> &'static [FoodItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact key lookup only
    pub fn get(&self, key: &str) -> Option<&'static FoodItem> {
        let items = self.items;
        self.exact.get(key).map(|&idx| &items[idx])
    }

    /// Keys containing any of the given separators, longest first
    pub fn keys_containing_any(&self, separators: &[&str]) -> Vec<&'static str> {
        self.by_length
            .iter()
            .map(|(key, _)| *key)
            .filter(|key| separators.iter().any(|sep| key.contains(sep)))
            .collect()
    }

    /// Whether the text mentions a key whose first word is `word`
    /// (e.g. "big mac" for "big")
    pub fn contains_key_starting_with(&self, text: &str, word: &str) -> bool {
        self.by_length.iter().any(|(key, _)| {
            key.split_whitespace().next() == Some(word) && contains_at_word_start(text, key)
        })
    }

    /// Resolve a query using the full priority order
    pub fn find(&self, query: &str) -> Option<&'static FoodItem> {
        let query = normalize(query);
        if query.is_empty() {
            return None;
        }
        let items = self.items;

        if let Some(item) = self.get(&query) {
            return Some(item);
        }

        // Most specific key mentioned in the query
        if let Some((key, idx)) = self
            .by_length
            .iter()
            .find(|(key, _)| contains_at_word_start(&query, key))
        {
            tracing::debug!(query = %query, key = %key, "Catalog key found inside query");
            return Some(&items[*idx]);
        }

        // Short or partial queries
        if let Some((key, idx)) = self
            .by_length
            .iter()
            .find(|(key, _)| contains_at_word_start(key, &query))
        {
            tracing::debug!(query = %query, key = %key, "Query found inside catalog key");
            return Some(&items[*idx]);
        }

        self.synonyms
            .iter()
            .find(|(phrase, _)| *phrase == query)
            .and_then(|(_, target)| self.get(target))
    }
}

/// Lowercase, trim and collapse internal whitespace
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True if `needle` occurs in `haystack` starting at a word boundary
fn contains_at_word_start(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(idx, _)| {
        haystack[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(find_food("big mac").unwrap().name, "Big Mac");
        assert_eq!(find_food("  Big   Mac ").unwrap().name, "Big Mac");
    }

    #[test]
    fn test_alias_maps_to_canonical_entry() {
        assert_eq!(find_food("french fries").unwrap().name, "Medium Fries");
        assert_eq!(find_food("hotdog").unwrap().name, "Hot Dog");
    }

    #[test]
    fn test_longest_key_wins() {
        assert_eq!(find_food("cheeseburger with cheese").unwrap().name, "Cheeseburger");
        assert_eq!(find_food("glass of orange juice").unwrap().name, "Orange Juice");
        assert_eq!(find_food("slice of apple pie").unwrap().name, "Apple Pie");
    }

    #[test]
    fn test_query_inside_longer_key() {
        assert_eq!(find_food("nug").unwrap().name, "Chicken Nuggets");
        assert_eq!(find_food("pepperoni").unwrap().name, "Pepperoni Pizza");
    }

    #[test]
    fn test_matches_start_on_word_boundaries() {
        // "rice" must not match inside "price", nor "ran" inside "orange"
        assert!(find_food("price").is_none());
        assert!(find_food("ran").is_none());
        assert_eq!(find_food("brown rice bowl").unwrap().name, "Brown Rice");
    }

    #[test]
    fn test_synonym_fallback() {
        assert_eq!(find_food("pop").unwrap().name, "Coca-Cola");
        assert_eq!(find_food("espresso").unwrap().name, "Coffee");
        assert_eq!(find_food("grilled chicken").unwrap().name, "Chicken Breast");
    }

    #[test]
    fn test_no_match() {
        assert!(find_food("unobtainium surprise").is_none());
        assert!(find_food("").is_none());
        assert!(find_food("   ").is_none());
    }

    #[test]
    fn test_catalog_size_and_keys() {
        let catalog = catalog();
        assert!(catalog.len() >= 60);
        assert!(catalog.get("large fries").is_some());
        assert!(catalog.get("large mac").is_none());
    }

    #[test]
    fn test_keys_containing_separators() {
        let keys = catalog().keys_containing_any(&[" and "]);
        assert_eq!(keys, vec!["macaroni and cheese", "mac and cheese"]);
        assert!(catalog().keys_containing_any(&[" plus "]).is_empty());
    }

    #[test]
    fn test_contains_key_starting_with() {
        let catalog = catalog();
        assert!(catalog.contains_key_starting_with("big macs", "big"));
        assert!(!catalog.contains_key_starting_with("big fries", "big"));
        assert!(catalog.contains_key_starting_with("large fries", "large"));
    }
}
