//! Tool definition - schema and metadata for a tool.
//!
//! Defines the interface for a tool that the LLM can invoke. Definitions are
//! immutable once registered.

use serde::{Deserialize, Serialize};

/// Definition of a tool that can be requested by the LLM.
///
/// # Examples
///
/// ```
/// use course_rag::domain::tools::ToolDefinition;
///
/// let definition = ToolDefinition::simple(
///     "get_course_outline",
///     "Get the complete outline of a course",
/// )
/// .with_parameter("course_name", "string", "Course title or partial name", true);
///
/// assert_eq!(definition.name(), "get_course_outline");
/// assert_eq!(definition.parameters_schema()["required"][0], "course_name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "search_course_content")
    name: String,

    /// Human-readable description for the LLM
    description: String,

    /// JSON Schema for the parameters
    parameters_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters_schema,
        }
    }

    /// Creates a tool definition with an empty object schema.
    ///
    /// Add parameters with [`with_parameter`](Self::with_parameter).
    pub fn simple(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(
            name,
            description,
            serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        )
    }

    /// Adds a property to the parameter schema.
    pub fn with_parameter(
        mut self,
        name: &str,
        json_type: &str,
        description: &str,
        required: bool,
    ) -> Self {
        if !self.parameters_schema["properties"].is_object() {
            self.parameters_schema["properties"] = serde_json::json!({});
        }
        self.parameters_schema["properties"][name] = serde_json::json!({
            "type": json_type,
            "description": description
        });

        if required {
            match self.parameters_schema["required"].as_array_mut() {
                Some(required) => required.push(serde_json::Value::from(name)),
                None => self.parameters_schema["required"] = serde_json::json!([name]),
            }
        }
        self
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parameters schema.
    pub fn parameters_schema(&self) -> &serde_json::Value {
        &self.parameters_schema
    }

    /// Converts to Anthropic tool format.
    pub fn to_anthropic_format(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.parameters_schema
        })
    }
}
