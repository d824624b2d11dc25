//! Answer Engine - Bounded tool-augmented answering.
//!
//! Produces one final answer for one question. The LLM may spend up to
//! `max_tool_rounds` rounds requesting tools; after that it gets one last
//! call with no tools so it has to answer in plain text.
//!
//! # Architecture
//!
//! - **AnswerEngine**: drives the round loop against an [`AIProvider`](crate::ports::AIProvider)
//! - **EngineState**: explicit states of the loop (reasoning, retrieving, exhausted, terminated)
//! - **Prompt**: fixed course-assistant instructions plus optional history
//!
//! # Example
//!
//! ```ignore
//! let engine = AnswerEngine::new(provider, EngineConfig::default());
//! let definitions = registry.definitions();
//! let answer = engine
//!     .answer(question, history.as_deref(), Some(&definitions), Some(&registry))
//!     .await?;
//! ```

mod engine;
mod prompt;
mod state;

pub use engine::{AnswerEngine, EngineConfig, NO_DISPATCHER_FALLBACK};
pub use prompt::{build_system_content, SYSTEM_PROMPT};
pub use state::EngineState;
