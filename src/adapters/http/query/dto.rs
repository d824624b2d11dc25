//! Data transfer objects for query HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Source;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to answer a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The user's question
    pub query: String,
    /// Session to continue (UUID string); a new one is created when absent
    #[serde(default)]
    pub session_id: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// A citation for the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceResponse {
    pub text: String,
    pub url: Option<String>,
}

impl From<Source> for SourceResponse {
    fn from(source: Source) -> Self {
        Self {
            text: source.text,
            url: source.url,
        }
    }
}

/// Answer with citations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub sources: Vec<SourceResponse>,
    pub session_id: String,
}

/// Catalog summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseStatsResponse {
    pub total_courses: usize,
    pub course_titles: Vec<String>,
}

/// Tools offered to the LLM, in Anthropic format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResponse {
    pub count: usize,
    pub tools: Vec<serde_json::Value>,
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            error: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_session_is_optional() {
        let req: QueryRequest = serde_json::from_str(r#"{"query": "What is MCP?"}"#).unwrap();
        assert_eq!(req.query, "What is MCP?");
        assert!(req.session_id.is_none());
    }

    #[test]
    fn source_response_keeps_null_url() {
        let response = SourceResponse::from(Source::new("Course A", None));
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Course A", "url": null}));
    }

    #[test]
    fn error_response_carries_code() {
        let error = ErrorResponse::bad_request("Invalid session_id");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.error, "Invalid session_id");
    }
}
