//! Data models
//!
//! Catalog entries and the records produced by parsing an utterance.

mod food_item;
mod macros;
mod parsed;
mod workout;

pub use food_item::FoodItem;
pub use macros::MacroBreakdown;
pub use parsed::{ParsedFood, ParsedResult, ParsedWater, ParsedWorkout};
pub use workout::{CardioType, StrengthExercise, WorkoutKind};
