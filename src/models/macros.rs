//! Shared macro-nutrient data structure
//!
//! Used by catalog entries, parsed foods, and per-parse totals.

use serde::{Deserialize, Serialize};

/// Macro-nutrient breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub calories: u32,
    pub protein: u32, // grams
    pub carbs: u32,   // grams
    pub sugar: u32,   // grams
    pub fat: u32,     // grams
}

impl MacroBreakdown {
    pub const fn new(calories: u32, protein: u32, carbs: u32, sugar: u32, fat: u32) -> Self {
        Self {
            calories,
            protein,
            carbs,
            sugar,
            fat,
        }
    }

    /// Create a new MacroBreakdown with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale by a serving multiplier, flooring each value to a whole unit
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: scale_floor(self.calories, multiplier),
            protein: scale_floor(self.protein, multiplier),
            carbs: scale_floor(self.carbs, multiplier),
            sugar: scale_floor(self.sugar, multiplier),
            fat: scale_floor(self.fat, multiplier),
        }
    }

    /// Add another breakdown to this one
    pub fn add(&self, other: &MacroBreakdown) -> Self {
        Self {
            calories: self.calories.saturating_add(other.calories),
            protein: self.protein.saturating_add(other.protein),
            carbs: self.carbs.saturating_add(other.carbs),
            sugar: self.sugar.saturating_add(other.sugar),
            fat: self.fat.saturating_add(other.fat),
        }
    }
}

// Negative or NaN multipliers clamp to zero through the saturating cast.
fn scale_floor(value: u32, multiplier: f64) -> u32 {
    (value as f64 * multiplier).floor() as u32
}

impl std::ops::Add for MacroBreakdown {
    type Output = MacroBreakdown;

    fn add(self, other: MacroBreakdown) -> MacroBreakdown {
        MacroBreakdown::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for MacroBreakdown {
    type Output = MacroBreakdown;

    fn mul(self, multiplier: f64) -> MacroBreakdown {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for MacroBreakdown {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroBreakdown::zero(), |acc, m| acc + m)
    }
}
