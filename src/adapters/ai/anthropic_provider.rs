//! Anthropic Provider - Implementation of AIProvider for Anthropic's Messages API.
//!
//! Supports tool use: tool definitions are sent with the request, `tool_use`
//! blocks come back as [`ContentBlock::ToolUse`], and tool results are sent
//! as `tool_result` blocks paired by `tool_use_id`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicConfig::new(api_key)
//!     .with_model("claude-sonnet-4-20250514")
//!     .with_base_url("https://api.anthropic.com");
//!
//! let provider = AnthropicProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::tools::ToolCallRequest;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ContentBlock, Message,
    MessageContent, MessageRole, ProviderInfo, StopReason, TokenUsage, ToolChoice,
};

/// Configuration for the Anthropic provider.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "claude-sonnet-4-20250514").
    pub model: String,
    /// Base URL for the API (default: https://api.anthropic.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl AnthropicConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Used when a request leaves `max_tokens` unset; the API requires one.
const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Backoff stops doubling after this many retries.
const MAX_BACKOFF_SHIFT: u32 = 6;

/// Exponential backoff: 1s, 2s, 4s, ... capped at 64s.
fn backoff_delay(retry_count: u32) -> Duration {
    Duration::from_secs(1 << retry_count.min(MAX_BACKOFF_SHIFT))
}

/// Anthropic API provider implementation.
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    /// Creates a new Anthropic provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `AIError::InvalidRequest` if the HTTP client cannot be built.
    pub fn new(config: AnthropicConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the messages endpoint URL.
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to Anthropic's format.
    fn to_anthropic_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        let tools: Vec<AnthropicTool> = request
            .tools
            .iter()
            .map(|tool| AnthropicTool {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.parameters_schema().clone(),
            })
            .collect();

        let tool_choice = match (tools.is_empty(), request.tool_choice) {
            (false, Some(ToolChoice::Auto)) => Some(AnthropicToolChoice {
                choice_type: "auto".to_string(),
            }),
            _ => None,
        };

        AnthropicRequest {
            model: self.config.model.clone(),
            messages: request
                .messages
                .iter()
                .map(AnthropicMessage::from)
                .collect(),
            system: request.system_prompt.clone(),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: request.temperature,
            tools,
            tool_choice,
        }
    }

    /// Sends a request and handles the response.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let anthropic_request = self.to_anthropic_request(request);

        self.client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(AIError::AuthenticationFailed),
            429 => Err(AIError::rate_limited(Self::parse_retry_after(&error_body))),
            400 => {
                if error_body.contains("prompt is too long") {
                    Err(AIError::context_too_long(0, 0))
                } else {
                    Err(AIError::InvalidRequest(error_body))
                }
            }
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(message) = parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                if let Some(idx) = message.find("try again in ") {
                    let rest = &message[idx + 13..];
                    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                    if let Ok(secs) = digits.parse::<u32>() {
                        return secs;
                    }
                }
            }
        }
        60
    }

    /// Parses a successful response body.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(anthropic_response.into_completion())
    }
}

#[async_trait]
impl AIProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let mut last_error = AIError::network("No attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            let attempt = match self.send_request(&request).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match attempt {
                Ok(completion) => return Ok(completion),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    tracing::warn!(
                        attempt = retry_count + 1,
                        max_retries = self.config.max_retries,
                        error = %err,
                        "Anthropic request failed, retrying"
                    );
                    last_error = err;
                }
            }

            sleep(backoff_delay(retry_count)).await;
            retry_count += 1;
        }

        Err(last_error)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("anthropic", &self.config.model, 200_000).with_tools(true)
    }
}

// ----- Anthropic API Types -----

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<AnthropicTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<AnthropicToolChoice>,
}

#[derive(Debug, Serialize)]
struct AnthropicTool {
    name: String,
    description: String,
    input_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct AnthropicToolChoice {
    #[serde(rename = "type")]
    choice_type: String,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: AnthropicContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum AnthropicContent {
    Text(String),
    Blocks(Vec<AnthropicBlock>),
}

/// Content blocks in both directions.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AnthropicBlock {
    Text { text: String },
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Value,
    },
    ToolResult {
        tool_use_id: String,
        content: String,
    },
    #[serde(other)]
    Unsupported,
}

impl From<&Message> for AnthropicMessage {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };
        let content = match &message.content {
            MessageContent::Text(text) => AnthropicContent::Text(text.clone()),
            MessageContent::Blocks(blocks) => {
                AnthropicContent::Blocks(blocks.iter().map(AnthropicBlock::from).collect())
            }
        };
        Self { role, content }
    }
}

impl From<&ContentBlock> for AnthropicBlock {
    fn from(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Text { text } => Self::Text { text: text.clone() },
            ContentBlock::ToolUse(call) => Self::ToolUse {
                id: call.call_id().to_string(),
                name: call.tool_name().to_string(),
                input: call.arguments().clone(),
            },
            ContentBlock::ToolResult(result) => Self::ToolResult {
                tool_use_id: result.call_id().to_string(),
                content: result.content().to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    model: String,
    content: Vec<AnthropicBlock>,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

impl AnthropicResponse {
    fn into_completion(self) -> CompletionResponse {
        let content = self
            .content
            .into_iter()
            .filter_map(|block| match block {
                AnthropicBlock::Text { text } => Some(ContentBlock::Text { text }),
                AnthropicBlock::ToolUse { id, name, input } => {
                    Some(ContentBlock::ToolUse(ToolCallRequest::new(id, name, input)))
                }
                AnthropicBlock::ToolResult { .. } | AnthropicBlock::Unsupported => None,
            })
            .collect();

        let stop_reason = self
            .stop_reason
            .as_deref()
            .map(StopReason::from_wire)
            .unwrap_or(StopReason::EndTurn);

        CompletionResponse {
            content,
            stop_reason,
            usage: TokenUsage::new(self.usage.input_tokens, self.usage.output_tokens),
            model: self.model,
        }
    }
}
