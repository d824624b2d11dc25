//! Tool call request and result types.
//!
//! These are the request/response value objects exchanged between the LLM
//! and the tool layer. A result is always a string and is paired back to
//! its request by `call_id`.

use serde::{Deserialize, Serialize};

/// A request from the LLM to invoke a tool.
///
/// # Examples
///
/// ```
/// use course_rag::domain::tools::ToolCallRequest;
///
/// let call = ToolCallRequest::new(
///     "toolu_01",
///     "search_course_content",
///     serde_json::json!({ "query": "MCP servers" }),
/// );
/// assert_eq!(call.tool_name(), "search_course_content");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Opaque id assigned by the LLM
    call_id: String,

    /// Name of the tool to invoke
    tool_name: String,

    /// Arguments for the tool (JSON object)
    arguments: serde_json::Value,
}

impl ToolCallRequest {
    /// Creates a new tool call request.
    pub fn new(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        arguments: serde_json::Value,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            arguments,
        }
    }

    pub fn call_id(&self) -> &str {
        &self.call_id
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn arguments(&self) -> &serde_json::Value {
        &self.arguments
    }
}

/// Outcome of one tool call, as text for the LLM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Id of the request this answers
    call_id: String,

    /// Result text (errors included)
    content: String,
}

impl ToolResult {
    pub fn new(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: content.into(),
        }
    }

    /// Creates the result answering `request`.
    pub fn for_request(request: &ToolCallRequest, content: impl Into<String>) -> Self {
        Self::new(request.call_id(), content)
    }

    pub fn call_id(&self) -> &str {
        &self.call_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_for_request_copies_call_id() {
        let call = ToolCallRequest::new(
            "toolu_42",
            "get_course_outline",
            serde_json::json!({"course_name": "MCP"}),
        );
        let result = ToolResult::for_request(&call, "Course: MCP");

        assert_eq!(result.call_id(), "toolu_42");
        assert_eq!(result.content(), "Course: MCP");
    }

    #[test]
    fn request_exposes_arguments() {
        let call = ToolCallRequest::new(
            "id",
            "search_course_content",
            serde_json::json!({"query": "x"}),
        );
        assert_eq!(call.arguments()["query"], "x");
    }
}
