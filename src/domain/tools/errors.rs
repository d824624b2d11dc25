//! Tool error types

use thiserror::Error;

/// Errors raised while registering or dispatching tools.
///
/// None of these abort an answer: the engine turns dispatch errors into
/// result text for the LLM.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// No tool registered under the requested name.
    #[error("Tool '{0}' not found")]
    UnknownTool(String),

    /// A tool with this name is already registered.
    #[error("Tool '{0}' is already registered")]
    DuplicateName(String),

    /// The LLM supplied arguments that do not match the tool's schema.
    #[error("Invalid arguments for '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },

    /// The tool failed while running.
    #[error("Tool execution failed: {0}")]
    Execution(String),
}

impl ToolError {
    /// Creates an invalid arguments error.
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Creates an execution error.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_names_the_tool() {
        let err = ToolError::UnknownTool("web_search".to_string());
        assert_eq!(err.to_string(), "Tool 'web_search' not found");
    }

    #[test]
    fn invalid_arguments_includes_detail() {
        let err = ToolError::invalid_arguments("search_course_content", "missing field `query`");
        assert!(err.to_string().contains("search_course_content"));
        assert!(err.to_string().contains("missing field `query`"));
    }
}
