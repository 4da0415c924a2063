//! Food Item model
//!
//! A catalog entry: canonical name, per-serving macros, and lookup keys.

use serde::Serialize;

use super::MacroBreakdown;

/// A food item with nutritional information per serving
#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    pub name: &'static str,
    pub serving: &'static str,
    pub macros: MacroBreakdown,
    /// Lowercase lookup keys; the first one is the canonical key
    pub keys: &'static [&'static str],
}

impl FoodItem {
    pub const fn new(
        name: &'static str,
        serving: &'static str,
        macros: MacroBreakdown,
        keys: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            serving,
            macros,
            keys,
        }
    }

    /// Macros for the given number of servings
    pub fn macros_for(&self, quantity: f64) -> MacroBreakdown {
        self.macros.scale(quantity)
    }
}
