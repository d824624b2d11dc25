//! AI Provider Port - Interface for LLM provider integrations.
//!
//! This port abstracts all interactions with the LLM, enabling the answer
//! engine to request completions (with or without tools) without coupling to
//! a specific provider.
//!
//! # Design
//!
//! - Provider-agnostic message format with structured content blocks
//! - Tool definitions travel with the request; tool use comes back as blocks
//! - Error types for common failure modes (rate limits, context too long, etc.)
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl AIProvider for EchoProvider {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
//!         Ok(CompletionResponse::text("Hello!"))
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo-1", 8_000)
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::tools::{ToolCallRequest, ToolDefinition, ToolResult};

/// Port for AI/LLM provider interactions.
///
/// Implementations connect to an external AI service and translate between
/// the provider-specific API and these types.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Get provider information (name, model, capabilities).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for AI completion.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    /// Conversation messages, oldest first.
    pub messages: Vec<Message>,
    /// System prompt to guide model behavior.
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for response randomness (0.0 = deterministic).
    pub temperature: Option<f32>,
    /// Tools the model may request. Empty means no tool use.
    pub tools: Vec<ToolDefinition>,
    /// How the model should choose among `tools`.
    pub tool_choice: Option<ToolChoice>,
}

impl CompletionRequest {
    /// Creates an empty completion request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain text message to the conversation.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message::new(role, content));
        self
    }

    /// Replaces the conversation messages.
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Offers tools to the model, letting it decide when to use them.
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self.tool_choice = Some(ToolChoice::Auto);
        self
    }

    /// Returns true if the request offers any tools.
    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }
}

/// Tool selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolChoice {
    /// The model decides whether to call a tool.
    Auto,
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message.
    pub role: MessageRole,
    /// Message content.
    pub content: MessageContent,
}

impl Message {
    /// Creates a plain text message.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Creates a message made of content blocks.
    pub fn blocks(role: MessageRole, blocks: Vec<ContentBlock>) -> Self {
        Self {
            role,
            content: MessageContent::Blocks(blocks),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Creates the user message carrying tool results back to the model.
    pub fn tool_results(results: Vec<ToolResult>) -> Self {
        Self::blocks(
            MessageRole::User,
            results.into_iter().map(ContentBlock::ToolResult).collect(),
        )
    }
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User input, including tool results.
    User,
    /// Assistant (model) response.
    Assistant,
}

/// Body of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// One structured piece of message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text.
    Text { text: String },
    /// The model asks for a tool invocation.
    ToolUse(ToolCallRequest),
    /// Result of a tool invocation, paired by call id.
    ToolResult(ToolResult),
}

impl ContentBlock {
    /// Creates a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Response from AI completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    /// Generated content blocks, in order.
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating.
    pub stop_reason: StopReason,
    /// Token usage.
    pub usage: TokenUsage,
    /// Model that generated the response.
    pub model: String,
}

impl CompletionResponse {
    /// Creates a plain text response that ends the turn.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage::zero(),
            model: String::new(),
        }
    }

    /// Creates a response requesting the given tool calls.
    pub fn tool_use(calls: Vec<ToolCallRequest>) -> Self {
        Self {
            content: calls.into_iter().map(ContentBlock::ToolUse).collect(),
            stop_reason: StopReason::ToolUse,
            usage: TokenUsage::zero(),
            model: String::new(),
        }
    }

    /// Concatenation of the text blocks, in order.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Tool calls requested by this response, in order.
    pub fn tool_calls(&self) -> Vec<&ToolCallRequest> {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::ToolUse(call) => Some(call),
                _ => None,
            })
            .collect()
    }

    /// Returns true if the model stopped to use tools.
    pub fn requests_tools(&self) -> bool {
        self.stop_reason == StopReason::ToolUse
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u32,
    /// Tokens in the completion.
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion).
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Creates new token usage.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }

    /// Creates zero usage.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of the response.
    EndTurn,
    /// The model wants tool results before continuing.
    ToolUse,
    /// Hit the max_tokens limit.
    MaxTokens,
    /// Hit a stop sequence.
    StopSequence,
    /// Anything else the provider reports.
    Other(String),
}

impl StopReason {
    /// Maps a provider's wire value.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "end_turn" => Self::EndTurn,
            "tool_use" => Self::ToolUse,
            "max_tokens" => Self::MaxTokens,
            "stop_sequence" => Self::StopSequence,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndTurn => write!(f, "end_turn"),
            Self::ToolUse => write!(f, "tool_use"),
            Self::MaxTokens => write!(f, "max_tokens"),
            Self::StopSequence => write!(f, "stop_sequence"),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Provider information and capabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "anthropic").
    pub name: String,
    /// Model identifier.
    pub model: String,
    /// Maximum context window size in tokens.
    pub max_context_tokens: u32,
    /// Whether tool calling is supported.
    pub supports_tools: bool,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>, max_context_tokens: u32) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            max_context_tokens,
            supports_tools: true,
        }
    }

    /// Sets tool calling support.
    pub fn with_tools(mut self, supports: bool) -> Self {
        self.supports_tools = supports;
        self
    }
}

/// AI provider errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AIError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Context (prompt + history) exceeds model limit.
    #[error("context too long: {tokens} tokens exceeds {max} limit")]
    ContextTooLong {
        /// Actual token count.
        tokens: u32,
        /// Maximum allowed.
        max: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl AIError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates a context too long error.
    pub fn context_too_long(tokens: u32, max: u32) -> Self {
        Self::ContextTooLong { tokens, max }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AIError::RateLimited { .. }
                | AIError::Unavailable { .. }
                | AIError::Network(_)
                | AIError::Timeout { .. }
        )
    }
}
