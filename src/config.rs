//! Runtime configuration
//!
//! Read from environment variables. The AI extractor is only enabled when an
//! API key is present.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_AI_MODEL: &str = "claude-3-5-haiku-latest";
pub const DEFAULT_AI_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 10;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Service configuration
#[derive(Clone)]
pub struct Config {
    pub ai_api_key: Option<String>,
    pub ai_model: String,
    pub ai_endpoint: String,
    pub ai_timeout: Duration,
    pub ai_disabled: bool,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let ai_api_key = non_empty("FITLOG_AI_API_KEY").or_else(|| non_empty("ANTHROPIC_API_KEY"));

        let ai_timeout = match non_empty("FITLOG_AI_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = value.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "FITLOG_AI_TIMEOUT_SECS",
                    value: value.clone(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: "FITLOG_AI_TIMEOUT_SECS",
                        value,
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
        };

        let ai_disabled = match non_empty("FITLOG_AI_DISABLED") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "FITLOG_AI_DISABLED",
                value,
            })?,
            None => false,
        };

        Ok(Self {
            ai_api_key,
            ai_model: non_empty("FITLOG_AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            ai_endpoint: non_empty("FITLOG_AI_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_AI_ENDPOINT.to_string()),
            ai_timeout,
            ai_disabled,
        })
    }

    /// Local parser only, no AI extractor
    pub fn local_only() -> Self {
        Self {
            ai_api_key: None,
            ai_model: DEFAULT_AI_MODEL.to_string(),
            ai_endpoint: DEFAULT_AI_ENDPOINT.to_string(),
            ai_timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
            ai_disabled: true,
        }
    }

    /// Whether the AI extractor should be tried first
    pub fn ai_enabled(&self) -> bool {
        !self.ai_disabled && self.ai_api_key.is_some()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("ai_api_key", &self.ai_api_key.as_ref().map(|_| "<redacted>"))
            .field("ai_model", &self.ai_model)
            .field("ai_endpoint", &self.ai_endpoint)
            .field("ai_timeout", &self.ai_timeout)
            .field("ai_disabled", &self.ai_disabled)
            .finish()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
