//! Mock AI Provider for testing.
//!
//! Provides a scripted implementation of the AIProvider port, allowing tests
//! and local runs to exercise the answer engine without calling a real API.
//!
//! # Features
//!
//! - Pre-configured text and tool-use responses, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_tool_use("toolu_1", "get_course_outline", json!({"course_name": "MCP"}))
//!     .with_response("The MCP course has 2 lessons.");
//!
//! let response = provider.complete(request).await?;
//! assert!(response.requests_tools());
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::tools::ToolCallRequest;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ContentBlock, ProviderInfo,
    StopReason, TokenUsage,
};

/// Mock AI provider for testing.
///
/// Configurable to return specific responses, simulate delays, or inject errors.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success {
        content: Vec<ContentBlock>,
        stop_reason: StopReason,
    },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate context too long.
    ContextTooLong { tokens: u32, max: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContextTooLong { tokens, max } => AIError::context_too_long(tokens, max),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Locks a mutex, recovering the data if a panicking test poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1", 128_000),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a plain text response that ends the turn.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.with_response_full(vec![ContentBlock::text(content)], StopReason::EndTurn)
    }

    /// Adds a response requesting one tool call.
    pub fn with_tool_use(
        self,
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        arguments: serde_json::Value,
    ) -> Self {
        self.with_tool_calls(vec![ToolCallRequest::new(call_id, tool_name, arguments)])
    }

    /// Adds a response requesting several tool calls, in order.
    pub fn with_tool_calls(self, calls: Vec<ToolCallRequest>) -> Self {
        self.with_response_full(
            calls.into_iter().map(ContentBlock::ToolUse).collect(),
            StopReason::ToolUse,
        )
    }

    /// Adds a successful response with full configuration.
    pub fn with_response_full(self, content: Vec<ContentBlock>, stop_reason: StopReason) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content,
            stop_reason,
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: vec![ContentBlock::text("Mock response")],
                stop_reason: StopReason::EndTurn,
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success {
                content,
                stop_reason,
            } => Ok(CompletionResponse {
                content,
                stop_reason,
                usage: TokenUsage::new(10, 20),
                model: self.info.model.clone(),
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
