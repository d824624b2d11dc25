//! Query HTTP adapter - REST API for the course question façade.
//!
//! Provides endpoints for:
//! - Answering questions with citations
//! - Course statistics
//! - Listing the tools offered to the LLM
//! - Liveness

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::QueryAppState;
pub use routes::query_router;
