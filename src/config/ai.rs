//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on `max_retries`; backoff doubles per retry.
pub const MAX_RETRIES: u32 = 10;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Anthropic API key
    pub anthropic_api_key: Option<Secret<String>>,

    /// Model identifier sent with every completion
    #[serde(default = "default_model")]
    pub model: String,

    /// Messages API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Token cap per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default)]
    pub temperature: f32,

    /// Tool rounds allowed before the forced final answer
    #[serde(default = "default_max_tool_rounds")]
    pub max_tool_rounds: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Anthropic is configured
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_anthropic() {
            return Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::MustBePositive("max_tokens"));
        }
        if self.max_tool_rounds == 0 {
            return Err(ValidationError::MustBePositive("max_tool_rounds"));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_retries > MAX_RETRIES {
            return Err(ValidationError::TooManyRetries(MAX_RETRIES));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            max_tokens: default_max_tokens(),
            temperature: 0.0,
            max_tool_rounds: default_max_tool_rounds(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    3
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_max_tool_rounds() -> u32 {
    2
}
