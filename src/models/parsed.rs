//! Parsed log records
//!
//! The output contract of both extraction engines.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MacroBreakdown, WorkoutKind};
use crate::units::ounces_to_ml;

/// A food resolved against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFood {
    /// Catalog display name, not the user's wording
    pub name: String,
    /// Servings (always positive)
    pub quantity: f64,
    /// Macros already scaled by quantity
    pub macros: MacroBreakdown,
}

/// Aggregate water intake for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedWater {
    pub ounces: u32,
}

impl ParsedWater {
    pub fn milliliters(&self) -> f64 {
        ounces_to_ml(self.ounces as f64)
    }
}

/// A cardio or strength workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedWorkout {
    pub kind: WorkoutKind,
    pub duration_minutes: Option<u32>,
    pub distance_miles: Option<f64>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub is_complete: bool,
}

impl ParsedWorkout {
    pub fn new(kind: WorkoutKind) -> Self {
        Self {
            kind,
            duration_minutes: None,
            distance_miles: None,
            sets: None,
            reps: None,
            is_complete: false,
        }
    }
}

/// Everything extracted from one utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResult {
    pub date: NaiveDate,
    pub foods: Vec<ParsedFood>,
    pub water: Option<ParsedWater>,
    pub workouts: Vec<ParsedWorkout>,
    pub raw_text: String,
}

impl ParsedResult {
    /// True when nothing in the utterance was understood
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty() && self.water.is_none() && self.workouts.is_empty()
    }

    /// Sum of the macros of every parsed food
    pub fn food_totals(&self) -> MacroBreakdown {
        self.foods.iter().map(|f| f.macros).sum()
    }
}
