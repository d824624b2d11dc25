//! Retrieval tools - Tool-augmented answering over the course catalog.
//!
//! The LLM never touches the index directly. It asks for tools by name and
//! the [`ToolRegistry`] dispatches those requests to [`Tool`] implementations.
//!
//! ## Key Types
//!
//! - [`ToolDefinition`] - Name, description, and parameter schema shown to the LLM
//! - [`ToolCallRequest`] - One tool invocation requested by the LLM
//! - [`ToolResult`] - String outcome paired back to its request by `call_id`
//! - [`Tool`] - Capability implemented by each concrete tool
//! - [`CitationSink`] - Per-invocation collector for [`Source`](crate::domain::catalog::Source)s
//! - [`ToolRegistry`] - Name-keyed dispatch and per-query citation accumulation
//! - [`CourseSearchTool`] / [`CourseOutlineTool`] - The two catalog tools
//!
//! Tool failures are information for the model, not faults: every error
//! eventually reaches the LLM as result text.

mod citation_sink;
mod course_outline;
mod course_search;
mod errors;
mod tool;
mod tool_call;
mod tool_definition;
mod tool_registry;

pub use citation_sink::CitationSink;
pub use course_outline::CourseOutlineTool;
pub use course_search::CourseSearchTool;
pub use errors::ToolError;
pub use tool::{parse_arguments, Tool};
pub use tool_call::{ToolCallRequest, ToolResult};
pub use tool_definition::ToolDefinition;
pub use tool_registry::ToolRegistry;
