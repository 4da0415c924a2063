//! Messages API client for AI extraction

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::response::parse_extraction;
use super::AiError;
use crate::config::Config;
use crate::models::ParsedResult;
use crate::parser::resolve_date;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

const EXTRACTION_PROMPT: &str = r#"Extract food, water and exercise from the log entry below.
Reply with ONLY a JSON object of this shape:
{"foods": [{"name": str, "quantity": number, "calories": number, "protein": number, "carbs": number, "sugar": number, "fat": number}],
 "water_oz": number or null,
 "workouts": [{"type": "cardio" or "strength", "activity": str, "duration_minutes": number or null, "distance_miles": number or null, "sets": number or null, "reps": number or null, "is_complete": bool}]}
Macros are totals for the stated quantity, in grams (calories in kcal). Estimate foods you do not know.
Cardio activity is one of: run, bike, swim, walk, elliptical, row.
Strength activity is one of: push_ups, squats, deadlifts, bench_press, pull_ups, lunges, plank.
Water is the total in fluid ounces (one glass = 8 oz).

Log entry: "#;

/// Client for the upstream AI extraction service
pub struct AiExtractor {
    api_key: String,
    model: String,
    endpoint: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl AiExtractor {
    /// Build a client from configuration. Fails when AI extraction is
    /// disabled or no API key is set.
    pub fn from_config(config: &Config) -> Result<Self, AiError> {
        if !config.ai_enabled() {
            return Err(AiError::NotConfigured);
        }
        let api_key = config.ai_api_key.clone().ok_or(AiError::NotConfigured)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(config.ai_timeout)
            .build()?;

        Ok(Self {
            api_key,
            model: config.ai_model.clone(),
            endpoint: config.ai_endpoint.clone(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the model to extract records from an utterance. The date always
    /// comes from the local resolver so both engines agree on it.
    pub fn extract(&self, text: &str, today: NaiveDate) -> Result<ParsedResult, AiError> {
        let reply = self.complete(&format!("{}{}", EXTRACTION_PROMPT, text))?;
        let extraction = parse_extraction(&reply)?;
        let date = resolve_date(&text.to_lowercase(), today);
        Ok(extraction.into_result(date, text))
    }

    fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;

        if status != 200 {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(AiError::Api { status, message });
        }

        let response: MessagesResponse =
            serde_json::from_str(&body).map_err(|e| AiError::Malformed(e.to_string()))?;

        response
            .content
            .into_iter()
            .find_map(|block| if block.block_type == "text" { block.text } else { None })
            .ok_or_else(|| AiError::Malformed("No text content in response".to_string()))
    }
}
