//! AI extraction wire format
//!
//! The JSON object the model is asked to return, and its conversion into the
//! same records the local parser produces.

use chrono::NaiveDate;
use serde::Deserialize;

use super::AiError;
use crate::models::{
    CardioType, MacroBreakdown, ParsedFood, ParsedResult, ParsedWater, ParsedWorkout,
    StrengthExercise, WorkoutKind,
};

#[derive(Debug, Default, Deserialize)]
pub struct AiExtraction {
    #[serde(default)]
    pub foods: Vec<AiFood>,
    #[serde(default)]
    pub water_oz: Option<f64>,
    #[serde(default)]
    pub workouts: Vec<AiWorkout>,
}

/// A food with macros for the whole stated quantity
#[derive(Debug, Deserialize)]
pub struct AiFood {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub fat: f64,
}

#[derive(Debug, Deserialize)]
pub struct AiWorkout {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub activity: String,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub distance_miles: Option<f64>,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub is_complete: bool,
}

/// Parse the model's text reply, tolerating code fences or prose around the
/// JSON object
pub fn parse_extraction(reply: &str) -> Result<AiExtraction, AiError> {
    let start = reply
        .find('{')
        .ok_or_else(|| AiError::Malformed("No JSON object in reply".to_string()))?;
    let end = reply
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| AiError::Malformed("Unterminated JSON object in reply".to_string()))?;

    serde_json::from_str(&reply[start..=end]).map_err(|e| AiError::Malformed(e.to_string()))
}

impl AiExtraction {
    /// Convert into a `ParsedResult`. Records the local model cannot represent
    /// (unknown activities, empty names) are dropped.
    pub fn into_result(self, date: NaiveDate, raw_text: &str) -> ParsedResult {
        let foods = self
            .foods
            .into_iter()
            .filter(|f| !f.name.trim().is_empty())
            .map(|f| ParsedFood {
                name: f.name.trim().to_string(),
                quantity: f
                    .quantity
                    .filter(|q| q.is_finite() && *q > 0.0)
                    .unwrap_or(1.0),
                macros: MacroBreakdown::new(
                    whole(f.calories),
                    whole(f.protein),
                    whole(f.carbs),
                    whole(f.sugar),
                    whole(f.fat),
                ),
            })
            .collect();

        let water = self
            .water_oz
            .map(whole)
            .filter(|&oz| oz > 0)
            .map(|ounces| ParsedWater { ounces });

        let workouts = self
            .workouts
            .into_iter()
            .filter_map(AiWorkout::into_workout)
            .collect();

        ParsedResult {
            date,
            foods,
            water,
            workouts,
            raw_text: raw_text.to_string(),
        }
    }
}

impl AiWorkout {
    fn into_workout(self) -> Option<ParsedWorkout> {
        let kind = match self.workout_type.trim().to_lowercase().as_str() {
            "cardio" => WorkoutKind::Cardio {
                activity: CardioType::from_str(&self.activity)?,
            },
            "strength" => WorkoutKind::Strength {
                exercise: StrengthExercise::from_str(&self.activity)?,
            },
            other => {
                tracing::debug!(workout_type = %other, "Dropping AI workout of unknown type");
                return None;
            }
        };

        let mut workout = ParsedWorkout::new(kind);
        workout.duration_minutes = self.duration_minutes.map(whole).filter(|&m| m > 0);
        workout.distance_miles = self.distance_miles.filter(|d| d.is_finite() && *d > 0.0);
        workout.sets = self.sets.filter(|&s| s > 0);
        workout.reps = self.reps.filter(|&r| r > 0);
        workout.is_complete = self.is_complete;
        Some(workout)
    }
}

/// Round to a non-negative whole number
fn whole(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_parse_fenced_reply() {
        let reply = "```json\n{\"foods\": [{\"name\": \"Big Mac\", \"quantity\": 1, \"calories\": 550, \"protein\": 25, \"carbs\": 45, \"sugar\": 9, \"fat\": 30}], \"water_oz\": 16, \"workouts\": []}\n```";
        let result = parse_extraction(reply).unwrap().into_result(date(), "raw");

        assert_eq!(result.foods.len(), 1);
        assert_eq!(result.foods[0].name, "Big Mac");
        assert_eq!(result.foods[0].macros, MacroBreakdown::new(550, 25, 45, 9, 30));
        assert_eq!(result.water, Some(ParsedWater { ounces: 16 }));
        assert_eq!(result.raw_text, "raw");
    }

    #[test]
    fn test_workouts_convert_and_unknown_are_dropped() {
        let reply = r#"{"workouts": [
            {"type": "cardio", "activity": "run", "distance_miles": 3.0, "duration_minutes": 30, "is_complete": true},
            {"type": "strength", "activity": "push-ups", "sets": 3, "reps": 15, "is_complete": true},
            {"type": "cardio", "activity": "zumba"},
            {"type": "yoga", "activity": "flow"}
        ]}"#;
        let result = parse_extraction(reply).unwrap().into_result(date(), "raw");

        assert_eq!(result.workouts.len(), 2);
        assert_eq!(
            result.workouts[0].kind,
            WorkoutKind::Cardio { activity: CardioType::Run }
        );
        assert_eq!(result.workouts[0].duration_minutes, Some(30));
        assert_eq!(
            result.workouts[1].kind,
            WorkoutKind::Strength { exercise: StrengthExercise::PushUps }
        );
        assert_eq!(result.workouts[1].reps, Some(15));
    }

    #[test]
    fn test_bad_values_are_sanitized() {
        let reply = r#"{"foods": [{"name": "Mystery stew", "quantity": -2, "calories": -10}, {"name": "  "}], "water_oz": 0}"#;
        let result = parse_extraction(reply).unwrap().into_result(date(), "raw");

        assert_eq!(result.foods.len(), 1);
        assert!((result.foods[0].quantity - 1.0).abs() < 0.001);
        assert_eq!(result.foods[0].macros.calories, 0);
        assert_eq!(result.water, None);
    }

    #[test]
    fn test_malformed_replies() {
        assert!(matches!(parse_extraction("no json here"), Err(AiError::Malformed(_))));
        assert!(matches!(parse_extraction("} {"), Err(AiError::Malformed(_))));
        assert!(matches!(parse_extraction("{\"foods\": 5}"), Err(AiError::Malformed(_))));
    }
}
