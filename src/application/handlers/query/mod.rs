//! Query Handlers
//!
//! The course question façade and its read-only companions.
//!
//! ## Commands
//! - `AnswerQuestion` - Answer one question, optionally within a session
//!
//! ## Queries
//! - `GetCourseAnalytics` - Course count and titles
//! - `ListToolDefinitions` - Tools offered to the LLM

mod answer_question;
mod course_analytics;
mod list_tool_definitions;

pub use answer_question::{
    AnswerQuestionCommand, AnswerQuestionError, AnswerQuestionHandler, AnswerQuestionResult,
    QUESTION_PREFIX,
};
pub use course_analytics::{CourseAnalytics, GetCourseAnalyticsHandler};
pub use list_tool_definitions::ListToolDefinitionsHandler;
