//! Tool Registry - Name-keyed dispatch for retrieval tools.
//!
//! The registry decouples the answer engine from concrete tools. It exposes
//! tool definitions in registration order, dispatches calls by name, and owns
//! the citation accumulation for the current query.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = ToolRegistry::new();
//! registry.register(CourseSearchTool::new(index.clone()))?;
//! registry.register(CourseOutlineTool::new(index))?;
//!
//! let output = registry
//!     .dispatch("search_course_content", &serde_json::json!({"query": "MCP"}))
//!     .await?;
//! let sources = registry.drain_sources().await;
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::catalog::Source;
use crate::ports::ToolDispatcher;

use super::{CitationSink, Tool, ToolCallRequest, ToolDefinition, ToolError};

/// Registry of available tools plus the current query's citations.
///
/// The citation accumulation is single-writer: whichever tool last produced
/// citations owns its contents until the caller drains it. Callers must
/// drain exactly once per user-facing query.
pub struct ToolRegistry {
    /// Tools in registration order
    tools: Vec<Arc<dyn Tool>>,

    /// Tool name to position in `tools`
    by_name: HashMap<String, usize>,

    /// Sources produced during the current query
    sources: Mutex<Vec<Source>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

impl ToolRegistry {
    /// Creates a new empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            by_name: HashMap::new(),
            sources: Mutex::new(Vec::new()),
        }
    }

    /// Registers a tool under its declared name.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::DuplicateName`] if the name is taken. The
    /// existing tool is kept.
    pub fn register(&mut self, tool: impl Tool + 'static) -> Result<(), ToolError> {
        self.register_shared(Arc::new(tool))
    }

    /// Registers an already shared tool.
    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let name = tool.definition().name().to_string();
        if self.has_tool(&name) {
            return Err(ToolError::DuplicateName(name));
        }

        tracing::debug!(tool = %name, "Registered tool");
        self.by_name.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Returns one definition per registered tool, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| tool.definition().clone())
            .collect()
    }

    /// Checks if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns all registered tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools
            .iter()
            .map(|tool| tool.definition().name())
            .collect()
    }

    /// Returns the number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Runs the named tool and returns its output verbatim.
    ///
    /// # Errors
    ///
    /// [`ToolError::UnknownTool`] when nothing is registered under `name`,
    /// otherwise whatever the tool itself reports.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: &serde_json::Value,
    ) -> Result<String, ToolError> {
        let tool = self
            .by_name
            .get(name)
            .and_then(|&index| self.tools.get(index))
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let mut citations = CitationSink::new();
        let output = tool.execute(arguments, &mut citations).await;

        if let Some(replacement) = citations.into_replacement() {
            tracing::debug!(tool = %name, sources = replacement.len(), "Tool replaced sources");
            *self.sources.lock().await = replacement;
        }

        output
    }

    /// Returns a copy of the accumulated sources without clearing them.
    #[cfg(test)]
    pub async fn last_sources(&self) -> Vec<Source> {
        self.sources.lock().await.clone()
    }

    /// Returns the accumulated sources and resets the accumulation.
    pub async fn drain_sources(&self) -> Vec<Source> {
        std::mem::take(&mut *self.sources.lock().await)
    }
}

#[async_trait]
impl ToolDispatcher for ToolRegistry {
    async fn execute_call(&self, call: &ToolCallRequest) -> Result<String, ToolError> {
        self.dispatch(call.tool_name(), call.arguments()).await
    }
}
