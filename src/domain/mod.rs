//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (session ids)
//! - `catalog` - Search queries, outcomes, outlines, and source citations
//! - `conversation` - Bounded per-session history
//! - `tools` - Tool trait, registry, and the two catalog tools
//! - `answer_engine` - Bounded tool-augmented round loop

pub mod answer_engine;
pub mod catalog;
pub mod conversation;
pub mod foundation;
pub mod tools;
