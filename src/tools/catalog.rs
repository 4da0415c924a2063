//! Food Catalog MCP Tools
//!
//! Read-only lookups against the built-in food catalog.

use serde::Serialize;

use crate::catalog::{catalog, find_food};
use crate::models::{FoodItem, MacroBreakdown};

/// Summary of a catalog entry for list/lookup results
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub name: &'static str,
    pub serving: &'static str,
    pub macros: MacroBreakdown,
    pub keys: &'static [&'static str],
}

impl From<&FoodItem> for FoodSummary {
    fn from(item: &FoodItem) -> Self {
        Self {
            name: item.name,
            serving: item.serving,
            macros: item.macros,
            keys: item.keys,
        }
    }
}

/// Response for lookup_food
#[derive(Debug, Serialize)]
pub struct LookupFoodResponse {
    pub query: String,
    pub found: bool,
    pub food: Option<FoodSummary>,
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub foods: Vec<FoodSummary>,
    pub total: usize,
}

/// Resolve a food phrase the same way the parser does
pub fn lookup_food(query: &str) -> Result<LookupFoodResponse, String> {
    if query.trim().is_empty() {
        return Err("Query is empty".to_string());
    }

    let food = find_food(query).map(FoodSummary::from);
    Ok(LookupFoodResponse {
        query: query.to_string(),
        found: food.is_some(),
        food,
    })
}

/// List every catalog entry, sorted by name
pub fn list_foods() -> ListFoodsResponse {
    let mut foods: Vec<FoodSummary> = catalog().items().iter().map(FoodSummary::from).collect();
    foods.sort_by(|a, b| a.name.cmp(b.name));

    ListFoodsResponse {
        total: foods.len(),
        foods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_alias() {
        let resp = lookup_food("French Fries").unwrap();
        assert!(resp.found);
        let food = resp.food.unwrap();
        assert_eq!(food.name, "Medium Fries");
        assert_eq!(food.macros.calories, 320);
    }

    #[test]
    fn test_lookup_miss_and_empty() {
        let resp = lookup_food("unobtainium").unwrap();
        assert!(!resp.found);
        assert!(resp.food.is_none());

        assert!(lookup_food("  ").is_err());
    }

    #[test]
    fn test_list_is_sorted() {
        let resp = list_foods();
        assert_eq!(resp.total, catalog().len());
        assert!(resp.foods.windows(2).all(|w| w[0].name <= w[1].name));
    }
}
