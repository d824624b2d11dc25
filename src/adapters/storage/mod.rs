//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Bounded per-session history held in memory
//!
//! ## Usage
//!
//! ```ignore
//! use course_rag::adapters::storage::InMemorySessionStore;
//!
//! let sessions = InMemorySessionStore::new(config.session.max_history);
//! ```

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
