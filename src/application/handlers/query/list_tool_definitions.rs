//! ListToolDefinitionsHandler - Tools offered to the LLM

use std::sync::Arc;

use crate::domain::tools::{ToolDefinition, ToolRegistry};

/// Handler listing registered tool definitions in registration order
pub struct ListToolDefinitionsHandler {
    registry: Arc<ToolRegistry>,
}

impl ListToolDefinitionsHandler {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }
}
