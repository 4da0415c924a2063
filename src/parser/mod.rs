//! Deterministic utterance parser
//!
//! Turns "ate a big mac, drank 2 glasses of water, ran 3 miles" into typed
//! food, water and workout records without any network access. Every
//! extractor is a pure function of the lowercased text.

pub mod food;
pub mod quantity;
pub mod segment;
pub mod temporal;
pub mod water;
pub mod workout;

use chrono::{Local, NaiveDate};

use crate::models::ParsedResult;

pub use food::extract_foods;
pub use quantity::extract_quantity;
pub use temporal::resolve_date;
pub use water::extract_water;
pub use workout::extract_workouts;

/// Parse an utterance relative to the local date
pub fn parse_entry(text: &str) -> ParsedResult {
    parse_entry_on(text, Local::now().date_naive())
}

/// Parse an utterance relative to the given "today"
pub fn parse_entry_on(text: &str, today: NaiveDate) -> ParsedResult {
    let normalized = normalize(text);

    let date = resolve_date(&normalized, today);
    let water = extract_water(&normalized);
    let foods = extract_foods(&normalized);
    let workouts = extract_workouts(&normalized);

    tracing::debug!(
        date = %date,
        foods = foods.len(),
        water_oz = water.map(|w| w.ounces),
        workouts = workouts.len(),
        "Parsed utterance"
    );

    ParsedResult {
        date,
        foods,
        water,
        workouts,
        raw_text: text.to_string(),
    }
}

/// Lowercase, straighten typographic apostrophes, collapse whitespace
fn normalize(text: &str) -> String {
    segment::collapse_whitespace(&text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'"))
}
