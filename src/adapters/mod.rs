//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM providers (Anthropic, scripted mock)
//! - `catalog` - Course index backed by a YAML catalog
//! - `storage` - In-memory session history
//! - `http` - Axum REST API

pub mod ai;
pub mod catalog;
pub mod http;
pub mod storage;

pub use ai::{AnthropicConfig, AnthropicProvider, MockAIProvider, MockError, MockResponse};
pub use catalog::InMemoryCourseIndex;
pub use storage::InMemorySessionStore;
