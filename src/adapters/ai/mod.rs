//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `AnthropicProvider` - Anthropic Messages API with tool use
//! - `MockAIProvider` - Scripted responses for tests and offline runs

mod anthropic_provider;
mod mock_provider;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
