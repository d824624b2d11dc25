//! Axum router configuration for query endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{answer_query, course_stats, health, list_tools, QueryAppState};

/// Create the query API router.
///
/// # Routes
///
/// - `POST /api/query` - Answer a question (optionally within a session)
/// - `GET /api/courses` - Course count and titles
/// - `GET /api/tools` - Tool definitions offered to the LLM
/// - `GET /health` - Liveness probe
///
/// # Example
///
/// ```ignore
/// let app = query_router().with_state(app_state);
/// ```
pub fn query_router() -> Router<QueryAppState> {
    Router::new()
        .route("/api/query", post(answer_query))
        .route("/api/courses", get(course_stats))
        .route("/api/tools", get(list_tools))
        .route("/health", get(health))
}
