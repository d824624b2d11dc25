//! The tool capability.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{CitationSink, ToolDefinition, ToolError};

/// A named, schema-described unit of work the LLM may request.
///
/// New tools are added by implementing this trait and registering the
/// implementation with a [`ToolRegistry`](super::ToolRegistry).
#[async_trait]
pub trait Tool: Send + Sync {
    /// Schema and description shown to the LLM. Its name is the dispatch key.
    fn definition(&self) -> &ToolDefinition;

    /// Runs the tool with the LLM-supplied arguments.
    ///
    /// Tools that produce passage citations record them into `citations`;
    /// tools that don't simply leave it untouched.
    async fn execute(
        &self,
        arguments: &serde_json::Value,
        citations: &mut CitationSink,
    ) -> Result<String, ToolError>;
}

/// Deserializes tool arguments into a typed struct.
pub fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: &serde_json::Value,
) -> Result<T, ToolError> {
    serde_json::from_value(arguments.clone())
        .map_err(|e| ToolError::invalid_arguments(tool, e.to_string()))
}
