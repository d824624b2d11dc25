//! Outline lookup tool - full lesson list for one course.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::catalog::CourseOutline;
use crate::ports::CourseIndex;

use super::{parse_arguments, CitationSink, Tool, ToolDefinition, ToolError};

const TOOL_NAME: &str = "get_course_outline";

#[derive(Debug, Deserialize)]
struct OutlineArguments {
    course_name: String,
}

/// Returns a course's title, link, instructor and ordered lessons.
///
/// Outline answers are not passage-attributed, so this tool never touches
/// the citation sink.
pub struct CourseOutlineTool {
    index: Arc<dyn CourseIndex>,
    definition: ToolDefinition,
}

impl CourseOutlineTool {
    pub fn new(index: Arc<dyn CourseIndex>) -> Self {
        let definition = ToolDefinition::simple(
            TOOL_NAME,
            "Get the complete outline of a course: title, link, and every lesson with its number and title",
        )
        .with_parameter(
            "course_name",
            "string",
            "Course title (partial matches work, e.g. 'MCP', 'Introduction')",
            true,
        );

        Self { index, definition }
    }

    fn render(outline: &CourseOutline) -> String {
        let mut lines = vec![format!("Course: {}", outline.title)];
        if let Some(link) = &outline.link {
            lines.push(format!("Link: {}", link));
        }
        if let Some(instructor) = &outline.instructor {
            lines.push(format!("Instructor: {}", instructor));
        }
        lines.push("Lessons:".to_string());
        lines.extend(
            outline
                .sorted_lessons()
                .into_iter()
                .map(|lesson| match &lesson.link {
                    Some(link) => format!("{}. {} ({})", lesson.number, lesson.title, link),
                    None => format!("{}. {}", lesson.number, lesson.title),
                }),
        );
        lines.join("\n")
    }
}

#[async_trait]
impl Tool for CourseOutlineTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        arguments: &serde_json::Value,
        _citations: &mut CitationSink,
    ) -> Result<String, ToolError> {
        let args: OutlineArguments = parse_arguments(TOOL_NAME, arguments)?;

        match self.index.course_outline(&args.course_name).await {
            Ok(outline) => Ok(Self::render(&outline)),
            Err(err) => {
                tracing::debug!(course = %args.course_name, error = %err, "Outline lookup failed");
                Ok(err.to_string())
            }
        }
    }
}
