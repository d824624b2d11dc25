//! Foundation module - Shared domain primitives.
//!
//! Identifiers shared by the session store, the query façade and the
//! HTTP layer.

mod ids;

pub use ids::SessionId;
