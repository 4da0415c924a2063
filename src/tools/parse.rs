//! Log Entry Parsing Tool
//!
//! Runs an utterance through the AI extractor (when configured) or the local parser.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::ai::{extract_with_fallback, AiExtractor, ExtractionSource};
use crate::config::Config;
use crate::models::{MacroBreakdown, ParsedResult};

const NOT_UNDERSTOOD_MESSAGE: &str =
    "Nothing recognizable was found. Try naming foods, water amounts, or workouts, e.g. \"ate 2 eggs and ran 3 miles\".";

/// Response for parse_log_entry
#[derive(Debug, Serialize)]
pub struct ParseLogEntryResponse {
    pub result: ParsedResult,
    pub source: ExtractionSource,
    pub understood: bool,
    pub message: Option<String>,
    /// Sum of the macros of every food found
    pub food_totals: MacroBreakdown,
    pub water_ml: Option<f64>,
}

/// Parse a free-text log entry
pub fn parse_log_entry(
    config: &Config,
    text: &str,
    date: Option<&str>,
    use_ai: bool,
) -> Result<ParseLogEntryResponse, String> {
    if text.trim().is_empty() {
        return Err("Log entry text is empty".to_string());
    }

    let today = match date {
        Some(d) => NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
            .map_err(|e| format!("Invalid date '{}' (expected YYYY-MM-DD): {}", d, e))?,
        None => Local::now().date_naive(),
    };

    let extractor = if use_ai && config.ai_enabled() {
        match AiExtractor::from_config(config) {
            Ok(ai) => Some(ai),
            Err(e) => {
                tracing::warn!("AI extractor unavailable: {}", e);
                None
            }
        }
    } else {
        None
    };

    let (result, source) = extract_with_fallback(extractor.as_ref(), text, today);
    let understood = !result.is_empty();

    tracing::info!(
        source = source.as_str(),
        date = %result.date,
        foods = result.foods.len(),
        water = result.water.is_some(),
        workouts = result.workouts.len(),
        "Parsed log entry"
    );

    Ok(ParseLogEntryResponse {
        food_totals: result.food_totals(),
        water_ml: result.water.map(|w| w.milliliters()),
        message: (!understood).then(|| NOT_UNDERSTOOD_MESSAGE.to_string()),
        result,
        source,
        understood,
    })
}
