//! Workout model
//!
//! Cardio activities and strength exercises recognized in an utterance.

use serde::{Deserialize, Serialize};

/// Cardio activity type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardioType {
    Run,
    Bike,
    Swim,
    Walk,
    Elliptical,
    Row,
}

impl CardioType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardioType::Run => "run",
            CardioType::Bike => "bike",
            CardioType::Swim => "swim",
            CardioType::Walk => "walk",
            CardioType::Elliptical => "elliptical",
            CardioType::Row => "row",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "run" | "running" | "jog" | "jogging" => Some(CardioType::Run),
            "bike" | "biking" | "cycling" | "cycle" => Some(CardioType::Bike),
            "swim" | "swimming" => Some(CardioType::Swim),
            "walk" | "walking" | "hike" | "hiking" => Some(CardioType::Walk),
            "elliptical" => Some(CardioType::Elliptical),
            "row" | "rowing" => Some(CardioType::Row),
            _ => None,
        }
    }
}

/// Strength exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthExercise {
    PushUps,
    Squats,
    Deadlifts,
    BenchPress,
    PullUps,
    Lunges,
    Plank,
}

impl StrengthExercise {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthExercise::PushUps => "push_ups",
            StrengthExercise::Squats => "squats",
            StrengthExercise::Deadlifts => "deadlifts",
            StrengthExercise::BenchPress => "bench_press",
            StrengthExercise::PullUps => "pull_ups",
            StrengthExercise::Lunges => "lunges",
            StrengthExercise::Plank => "plank",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "push_ups" | "pushups" | "push_up" | "pushup" => Some(StrengthExercise::PushUps),
            "squats" | "squat" => Some(StrengthExercise::Squats),
            "deadlifts" | "deadlift" => Some(StrengthExercise::Deadlifts),
            "bench_press" | "bench" => Some(StrengthExercise::BenchPress),
            "pull_ups" | "pullups" | "pull_up" | "pullup" => Some(StrengthExercise::PullUps),
            "lunges" | "lunge" => Some(StrengthExercise::Lunges),
            "plank" | "planks" => Some(StrengthExercise::Plank),
            _ => None,
        }
    }
}

/// What kind of workout a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutKind {
    Cardio { activity: CardioType },
    Strength { exercise: StrengthExercise },
}

impl WorkoutKind {
    pub fn is_cardio(&self) -> bool {
        matches!(self, WorkoutKind::Cardio { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardio_round_trip_names() {
        for t in [
            CardioType::Run,
            CardioType::Bike,
            CardioType::Swim,
            CardioType::Walk,
            CardioType::Elliptical,
            CardioType::Row,
        ] {
            assert_eq!(CardioType::from_str(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_strength_from_str_variants() {
        assert_eq!(StrengthExercise::from_str("push-ups"), Some(StrengthExercise::PushUps));
        assert_eq!(StrengthExercise::from_str("Bench Press"), Some(StrengthExercise::BenchPress));
        assert_eq!(StrengthExercise::from_str("pullups"), Some(StrengthExercise::PullUps));
        assert_eq!(StrengthExercise::from_str("curls"), None);
    }

    #[test]
    fn test_kind_serializes_with_type_tag() {
        let kind = WorkoutKind::Strength { exercise: StrengthExercise::Squats };
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json["type"], "strength");
        assert_eq!(json["exercise"], "squats");
    }
}
