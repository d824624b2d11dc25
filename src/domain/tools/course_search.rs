//! Content search tool - ranked passage retrieval with citations.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::catalog::{PassageMetadata, SearchOutcome, SearchQuery, Source};
use crate::ports::CourseIndex;

use super::{parse_arguments, CitationSink, Tool, ToolDefinition, ToolError};

const TOOL_NAME: &str = "search_course_content";

#[derive(Debug, Deserialize)]
struct SearchArguments {
    query: String,
    #[serde(default)]
    course_name: Option<String>,
    #[serde(default)]
    lesson_number: Option<u32>,
}

/// Searches course passages and formats them for the LLM.
///
/// Filters are passed to the index unchanged; any fuzzy course-name matching
/// is the index's job. Each call replaces the previously recorded sources.
pub struct CourseSearchTool {
    index: Arc<dyn CourseIndex>,
    definition: ToolDefinition,
}

impl CourseSearchTool {
    pub fn new(index: Arc<dyn CourseIndex>) -> Self {
        let definition = ToolDefinition::simple(
            TOOL_NAME,
            "Search course materials with smart course name matching and lesson filtering",
        )
        .with_parameter(
            "query",
            "string",
            "What to search for in the course content",
            true,
        )
        .with_parameter(
            "course_name",
            "string",
            "Course title (partial matches work, e.g. 'MCP', 'Introduction')",
            false,
        )
        .with_parameter(
            "lesson_number",
            "integer",
            "Specific lesson number to search within (e.g. 1, 2, 3)",
            false,
        );

        Self { index, definition }
    }

    /// Renders the message returned when the index found nothing.
    fn empty_message(query: &SearchQuery) -> String {
        let mut message = String::from("No relevant content found");
        if let Some(course) = &query.course_name {
            message.push_str(&format!(" in course '{}'", course));
        }
        if let Some(lesson) = query.lesson_number {
            message.push_str(&format!(" in lesson {}", lesson));
        }
        message.push('.');
        message
    }

    async fn citation_url(&self, metadata: &PassageMetadata) -> Option<String> {
        let title = &metadata.course_title;
        match metadata.lesson_number {
            Some(lesson) => self.index.lesson_link(title, lesson).await,
            None => self.index.course_link(title).await,
        }
    }

    async fn format_results(
        &self,
        outcome: &SearchOutcome,
        citations: &mut CitationSink,
    ) -> String {
        let mut blocks = Vec::with_capacity(outcome.documents().len());

        for (passage, metadata) in outcome.passages() {
            blocks.push(format!("[{}]\n{}", metadata.label(), passage));
            let url = self.citation_url(metadata).await;
            citations.record(Source::for_passage(metadata, url));
        }

        blocks.join("\n\n")
    }
}

#[async_trait]
impl Tool for CourseSearchTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        arguments: &serde_json::Value,
        citations: &mut CitationSink,
    ) -> Result<String, ToolError> {
        let args: SearchArguments = parse_arguments(TOOL_NAME, arguments)?;

        let mut query = SearchQuery::new(args.query);
        if let Some(course) = args.course_name {
            query = query.with_course(course);
        }
        if let Some(lesson) = args.lesson_number {
            query = query.with_lesson(lesson);
        }

        citations.reset();
        let outcome = self.index.search(&query).await;

        if let Some(error) = outcome.error_message() {
            tracing::debug!(
                query = %query.query,
                error = %error,
                "Search reported a retrieval error"
            );
            return Ok(error.to_string());
        }

        if outcome.is_empty() {
            tracing::debug!(
                query = %query.query,
                course = ?query.course_name,
                lesson = ?query.lesson_number,
                "Search returned no passages"
            );
            return Ok(Self::empty_message(&query));
        }

        Ok(self.format_results(&outcome, citations).await)
    }
}
