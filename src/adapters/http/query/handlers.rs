//! HTTP handlers for query endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::query::{
    AnswerQuestionCommand, AnswerQuestionHandler, GetCourseAnalyticsHandler,
    ListToolDefinitionsHandler,
};
use crate::domain::foundation::SessionId;
use crate::ports::SessionStore;

use super::dto::{
    CourseStatsResponse, ErrorResponse, HealthResponse, ListToolsResponse, QueryRequest,
    QueryResponse, SourceResponse,
};

/// Application state for query endpoints.
#[derive(Clone)]
pub struct QueryAppState {
    /// Question façade
    pub answer_handler: Arc<AnswerQuestionHandler>,
    /// Catalog summary
    pub analytics_handler: Arc<GetCourseAnalyticsHandler>,
    /// Tool listing
    pub tools_handler: Arc<ListToolDefinitionsHandler>,
    /// Session history store
    pub sessions: Arc<dyn SessionStore>,
}

fn internal_error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal(message)),
    )
        .into_response()
}

/// Answer a question about course materials.
///
/// POST /api/query
pub async fn answer_query(
    State(state): State<QueryAppState>,
    Json(request): Json<QueryRequest>,
) -> Response {
    let session_id = match request.session_id.as_deref() {
        Some(raw) => match raw.parse::<SessionId>() {
            Ok(session_id) => session_id,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request("Invalid session_id format")),
                )
                    .into_response()
            }
        },
        None => match state.sessions.create_session().await {
            Ok(session_id) => session_id,
            Err(e) => return internal_error(e.to_string()),
        },
    };

    let cmd = AnswerQuestionCommand::new(request.query).in_session(session_id);

    match state.answer_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(QueryResponse {
                answer: result.answer,
                sources: result
                    .sources
                    .into_iter()
                    .map(SourceResponse::from)
                    .collect(),
                session_id: session_id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => internal_error(e.to_string()),
    }
}

/// Get course statistics.
///
/// GET /api/courses
pub async fn course_stats(State(state): State<QueryAppState>) -> Response {
    match state.analytics_handler.handle().await {
        Ok(analytics) => Json(CourseStatsResponse {
            total_courses: analytics.total_courses,
            course_titles: analytics.course_titles,
        })
        .into_response(),
        Err(e) => internal_error(e.to_string()),
    }
}

/// List the tools offered to the LLM.
///
/// GET /api/tools
pub async fn list_tools(State(state): State<QueryAppState>) -> impl IntoResponse {
    let tools: Vec<serde_json::Value> = state
        .tools_handler
        .handle()
        .iter()
        .map(|definition| definition.to_anthropic_format())
        .collect();

    Json(ListToolsResponse {
        count: tools.len(),
        tools,
    })
}

/// Liveness probe.
///
/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
