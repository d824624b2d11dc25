//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - LLM completions with tool use
//! - `CourseIndex` - Pre-built course content index (search, outlines, links)
//! - `SessionStore` - Bounded conversation history per session
//! - `ToolDispatcher` - Capability the answer engine uses to run tool calls

mod ai_provider;
mod course_index;
mod session_store;
mod tool_dispatcher;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ContentBlock, Message,
    MessageContent, MessageRole, ProviderInfo, StopReason, TokenUsage, ToolChoice,
};
pub use course_index::CourseIndex;
pub use session_store::{SessionStore, SessionStoreError};
pub use tool_dispatcher::ToolDispatcher;
