//! AI extraction with local fallback
//!
//! The AI service is tried first when configured; on any failure the
//! deterministic parser produces the same output shape.

pub mod client;
pub mod response;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::models::ParsedResult;
use crate::parser::parse_entry_on;

pub use client::AiExtractor;

/// AI extraction error types
#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI extraction is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed AI response: {0}")]
    Malformed(String),
}

/// Which engine produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionSource {
    Ai,
    Local,
}

impl ExtractionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionSource::Ai => "ai",
            ExtractionSource::Local => "local",
        }
    }
}

/// Try the AI extractor (if any), falling back to the local parser
pub fn extract_with_fallback(
    ai: Option<&AiExtractor>,
    text: &str,
    today: NaiveDate,
) -> (ParsedResult, ExtractionSource) {
    if let Some(ai) = ai {
        match ai.extract(text, today) {
            Ok(result) => return (result, ExtractionSource::Ai),
            Err(e) => {
                tracing::warn!(model = %ai.model(), "AI extraction failed, using local parser: {}", e);
            }
        }
    }

    (parse_entry_on(text, today), ExtractionSource::Local)
}
