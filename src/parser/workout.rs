//! Workout extraction
//!
//! Every fragment runs through both the cardio and the strength parser, so
//! one fragment can produce one record of each kind.

use std::sync::LazyLock;

use regex::Regex;

use super::quantity::{number_with_unit, parse_number};
use super::segment::{contains_any_word, contains_word, split_fragments, WORKOUT_SEPARATORS};
use crate::models::{CardioType, ParsedWorkout, StrengthExercise, WorkoutKind};
use crate::units::{hours_to_minutes, km_to_miles};

static CARDIO_KEYWORDS: &[(CardioType, &[&str])] = &[
    (
        CardioType::Run,
        &["ran", "run", "runs", "running", "jog", "jogged", "jogging", "treadmill"],
    ),
    (
        CardioType::Bike,
        &["biked", "bike", "biking", "cycled", "cycle", "cycling", "spin class"],
    ),
    (CardioType::Swim, &["swam", "swim", "swimming"]),
    (
        CardioType::Walk,
        &["walked", "walk", "walking", "hiked", "hike", "hiking"],
    ),
    (CardioType::Elliptical, &["elliptical"]),
    (CardioType::Row, &["rowed", "row", "rowing", "rower"]),
];

static STRENGTH_KEYWORDS: &[(StrengthExercise, &[&str])] = &[
    (
        StrengthExercise::PushUps,
        &["push-ups", "push ups", "pushups", "push-up", "push up", "pushup"],
    ),
    (StrengthExercise::Squats, &["squats", "squat", "squatted"]),
    (
        StrengthExercise::Deadlifts,
        &["deadlifts", "deadlift", "deadlifted"],
    ),
    (
        StrengthExercise::BenchPress,
        &["bench press", "bench pressed", "benched", "bench"],
    ),
    (
        StrengthExercise::PullUps,
        &[
            "pull-ups", "pull ups", "pullups", "pull-up", "pull up", "pullup", "chin-ups",
            "chin ups", "chinups",
        ],
    ),
    (StrengthExercise::Lunges, &["lunges", "lunge"]),
    (StrengthExercise::Plank, &["planks", "plank", "planked"]),
];

static CARDIO_COMPLETION_VERBS: &[&str] = &[
    "completed", "did", "finished", "ran", "biked", "swam", "walked",
];

static STRENGTH_COMPLETION_VERBS: &[&str] = &["completed", "did", "finished"];

static MINUTES_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| number_with_unit(r"(?:minutes?|mins?)\b"));

static HALF_HOUR_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\bhalf (?:an )?hour\b").ok());

static HOURS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| number_with_unit(r"(?:hours?|hrs?)\b"));

static AN_HOUR_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?:an|one) hour\b").ok());

static MILES_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| number_with_unit(r"(?:miles?|mi)\b"));

static KM_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| number_with_unit(r"(?:kilometers?|kilometres?|km)\b"));

static SETS_OF_REPS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*sets?\s*(?:of|x|×|\*)\s*(\d+)(?:\s*reps?)?").ok()
});

static SETS_BY_REPS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:x|×|\*)\s*(\d+)").ok());

static SETS_ONLY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*sets?\b").ok());

/// Extract every cardio and strength workout from lowercased text
pub fn extract_workouts(text: &str) -> Vec<ParsedWorkout> {
    let mut workouts = Vec::new();

    for fragment in split_fragments(text, WORKOUT_SEPARATORS) {
        if let Some(workout) = parse_cardio(&fragment) {
            workouts.push(workout);
        }
        if let Some(workout) = parse_strength(&fragment) {
            workouts.push(workout);
        }
    }

    workouts
}

fn parse_cardio(fragment: &str) -> Option<ParsedWorkout> {
    let (activity, mut is_complete) = if contains_word(fragment, "cardio") {
        (CardioType::Run, false)
    } else {
        let activity = CARDIO_KEYWORDS
            .iter()
            .find(|(_, keywords)| contains_any_word(fragment, keywords))
            .map(|(activity, _)| *activity)?;
        (activity, true)
    };

    if !is_complete {
        is_complete = contains_any_word(fragment, CARDIO_COMPLETION_VERBS);
    }

    let mut workout = ParsedWorkout::new(WorkoutKind::Cardio { activity });
    workout.duration_minutes = parse_duration(fragment);
    workout.distance_miles = parse_distance(fragment);
    workout.is_complete = is_complete;
    Some(workout)
}

fn parse_strength(fragment: &str) -> Option<ParsedWorkout> {
    let (exercise, mut is_complete) = if contains_word(fragment, "strength") {
        (StrengthExercise::Squats, false)
    } else {
        let exercise = STRENGTH_KEYWORDS
            .iter()
            .find(|(_, keywords)| contains_any_word(fragment, keywords))
            .map(|(exercise, _)| *exercise)?;
        (exercise, true)
    };

    if !is_complete {
        is_complete = contains_any_word(fragment, STRENGTH_COMPLETION_VERBS);
    }

    let (sets, reps) = parse_sets_reps(fragment);

    let mut workout = ParsedWorkout::new(WorkoutKind::Strength { exercise });
    workout.sets = sets;
    workout.reps = reps;
    // Timed holds such as planks
    workout.duration_minutes = parse_duration(fragment);
    workout.is_complete = is_complete;
    Some(workout)
}

/// Minutes, then "half hour", then hours
fn parse_duration(fragment: &str) -> Option<u32> {
    if let Some(minutes) = first_number(MINUTES_PATTERN.as_ref(), fragment) {
        return Some(minutes.round() as u32);
    }
    if HALF_HOUR_PATTERN.as_ref().is_some_and(|re| re.is_match(fragment)) {
        return Some(30);
    }
    if let Some(hours) = first_number(HOURS_PATTERN.as_ref(), fragment) {
        return Some(hours_to_minutes(hours));
    }
    if AN_HOUR_PATTERN.as_ref().is_some_and(|re| re.is_match(fragment)) {
        return Some(60);
    }
    None
}

/// Miles as-is, kilometers converted to miles
fn parse_distance(fragment: &str) -> Option<f64> {
    if let Some(miles) = first_number(MILES_PATTERN.as_ref(), fragment) {
        return Some(miles);
    }
    first_number(KM_PATTERN.as_ref(), fragment).map(km_to_miles)
}

fn parse_sets_reps(fragment: &str) -> (Option<u32>, Option<u32>) {
    for pattern in [SETS_OF_REPS_PATTERN.as_ref(), SETS_BY_REPS_PATTERN.as_ref()] {
        if let Some(caps) = pattern.and_then(|re| re.captures(fragment)) {
            let sets = caps.get(1).and_then(|m| m.as_str().parse().ok());
            let reps = caps.get(2).and_then(|m| m.as_str().parse().ok());
            return (sets, reps);
        }
    }

    let sets = SETS_ONLY_PATTERN
        .as_ref()
        .and_then(|re| re.captures(fragment))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok());
    (sets, None)
}

fn first_number(pattern: Option<&Regex>, text: &str) -> Option<f64> {
    let caps = pattern?.captures(text)?;
    parse_number(caps.get(1)?.as_str()).filter(|n| n.is_finite() && *n > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardio(activity: CardioType) -> WorkoutKind {
        WorkoutKind::Cardio { activity }
    }

    fn strength(exercise: StrengthExercise) -> WorkoutKind {
        WorkoutKind::Strength { exercise }
    }

    #[test]
    fn test_run_with_distance_and_duration() {
        let workouts = extract_workouts("ran 3 miles in 30 minutes");
        assert_eq!(workouts.len(), 1);
        let w = &workouts[0];
        assert_eq!(w.kind, cardio(CardioType::Run));
        assert_eq!(w.distance_miles, Some(3.0));
        assert_eq!(w.duration_minutes, Some(30));
        assert!(w.is_complete);
    }

    #[test]
    fn test_sets_of_reps() {
        let workouts = extract_workouts("did 3 sets of 12 squats");
        assert_eq!(workouts.len(), 1);
        let w = &workouts[0];
        assert_eq!(w.kind, strength(StrengthExercise::Squats));
        assert_eq!(w.sets, Some(3));
        assert_eq!(w.reps, Some(12));
        assert!(w.is_complete);
    }

    #[test]
    fn test_sets_by_reps_shorthand() {
        let workouts = extract_workouts("bench press 4x8");
        assert_eq!(workouts[0].kind, strength(StrengthExercise::BenchPress));
        assert_eq!(workouts[0].sets, Some(4));
        assert_eq!(workouts[0].reps, Some(8));
    }

    #[test]
    fn test_sets_only() {
        let workouts = extract_workouts("5 sets of lunges");
        assert_eq!(workouts[0].kind, strength(StrengthExercise::Lunges));
        assert_eq!(workouts[0].sets, Some(5));
        assert_eq!(workouts[0].reps, None);
    }

    #[test]
    fn test_kilometers_convert_to_miles() {
        let workouts = extract_workouts("biked 10 km");
        assert_eq!(workouts[0].kind, cardio(CardioType::Bike));
        let miles = workouts[0].distance_miles.unwrap();
        assert!((miles - 6.21371).abs() < 0.001);
    }

    #[test]
    fn test_duration_forms() {
        assert_eq!(extract_workouts("swam for half an hour")[0].duration_minutes, Some(30));
        assert_eq!(extract_workouts("walked for 2 hours")[0].duration_minutes, Some(120));
        assert_eq!(extract_workouts("rowing 1.5 hrs")[0].duration_minutes, Some(90));
        assert_eq!(extract_workouts("hiked for an hour")[0].duration_minutes, Some(60));
    }

    #[test]
    fn test_fractional_distance_and_duration() {
        let workouts = extract_workouts("jogged 1/2 mile");
        assert_eq!(workouts[0].distance_miles, Some(0.5));

        let workouts = extract_workouts("walked for 1/2 hour");
        assert_eq!(workouts[0].duration_minutes, Some(30));

        let workouts = extract_workouts("swam 3/4 km");
        let miles = workouts[0].distance_miles.unwrap();
        assert!((miles - 0.466028).abs() < 0.001);

        let workouts = extract_workouts("ran 1/4 mile in 3/4 hour");
        assert_eq!(workouts[0].distance_miles, Some(0.25));
        assert_eq!(workouts[0].duration_minutes, Some(45));
    }

    #[test]
    fn test_generic_cardio_defaults_to_run() {
        let workouts = extract_workouts("30 min cardio");
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].kind, cardio(CardioType::Run));
        assert_eq!(workouts[0].duration_minutes, Some(30));
        assert!(!workouts[0].is_complete);

        let workouts = extract_workouts("did 20 minutes of cardio");
        assert!(workouts[0].is_complete);
    }

    #[test]
    fn test_generic_strength_defaults_to_squats() {
        let workouts = extract_workouts("strength workout");
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].kind, strength(StrengthExercise::Squats));
        assert!(!workouts[0].is_complete);
    }

    #[test]
    fn test_then_separates_workouts() {
        let workouts = extract_workouts("ran 2 miles then did 50 pushups");
        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[0].kind, cardio(CardioType::Run));
        assert_eq!(workouts[1].kind, strength(StrengthExercise::PushUps));
    }

    #[test]
    fn test_one_fragment_can_yield_both_kinds() {
        let workouts = extract_workouts("cardio plus squats");
        assert_eq!(workouts.len(), 2);

        let workouts = extract_workouts("ran to the gym for squats");
        assert_eq!(workouts.len(), 2);
        assert!(workouts[0].kind.is_cardio());
        assert!(!workouts[1].kind.is_cardio());
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        assert!(extract_workouts("had brunch").is_empty());
        assert!(extract_workouts("ate a big mac").is_empty());
    }

    #[test]
    fn test_first_cardio_group_wins() {
        let workouts = extract_workouts("walked and ran");
        assert_eq!(workouts.len(), 2);
        let workouts = extract_workouts("ran while walking the dog");
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].kind, cardio(CardioType::Run));
    }
}
