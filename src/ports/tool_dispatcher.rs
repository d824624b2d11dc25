//! Tool Dispatcher Port - Capability the answer engine uses to run tools.
//!
//! The engine only needs "run this call and give me text back". Keeping that
//! behind a trait lets the engine run without any tools at all and lets tests
//! substitute scripted dispatchers.

use async_trait::async_trait;

use crate::domain::tools::{ToolCallRequest, ToolError};

/// Runs tool calls requested by the LLM.
#[async_trait]
pub trait ToolDispatcher: Send + Sync {
    /// Execute one call and return its result text.
    ///
    /// # Errors
    ///
    /// Unknown tools and tool failures. Callers turn these into result text
    /// rather than aborting.
    async fn execute_call(&self, call: &ToolCallRequest) -> Result<String, ToolError>;
}
