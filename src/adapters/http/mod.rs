//! HTTP adapters - REST API implementations.
//!
//! The query module exposes the course question façade; `app_router` wires
//! it together with request tracing and CORS.

pub mod middleware;
pub mod query;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use middleware::cors_layer;
pub use query::{query_router, QueryAppState};

/// Build the complete application router.
pub fn app_router(state: QueryAppState, cors_origins: &[String]) -> Router {
    query_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
}
