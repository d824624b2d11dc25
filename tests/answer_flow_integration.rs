//! Integration tests for the question answering flow.
//!
//! These tests drive `AnswerQuestionHandler` end to end with the mock LLM,
//! the in-memory course index and the in-memory session store:
//! 1. Outline questions dispatch the outline tool exactly once
//! 2. Follow-up questions see the previous exchange in the system prompt
//! 3. Citations are returned once and never leak into the next answer

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

use course_rag::adapters::{InMemoryCourseIndex, InMemorySessionStore, MockAIProvider};
use course_rag::application::{AnswerQuestionCommand, AnswerQuestionHandler};
use course_rag::domain::answer_engine::{AnswerEngine, EngineConfig};
use course_rag::domain::catalog::{
    CatalogError, CourseOutline, LessonEntry, SearchOutcome, SearchQuery, Source,
};
use course_rag::domain::tools::{CourseOutlineTool, CourseSearchTool, ToolCallRequest, ToolRegistry};
use course_rag::ports::{ContentBlock, CourseIndex, MessageContent, MessageRole, SessionStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Course index that records every lookup before delegating.
struct RecordingIndex {
    inner: InMemoryCourseIndex,
    outline_requests: Mutex<Vec<String>>,
    searches: Mutex<Vec<SearchQuery>>,
}

impl RecordingIndex {
    fn new(inner: InMemoryCourseIndex) -> Self {
        Self {
            inner,
            outline_requests: Mutex::new(Vec::new()),
            searches: Mutex::new(Vec::new()),
        }
    }

    fn outline_requests(&self) -> Vec<String> {
        self.outline_requests.lock().unwrap().clone()
    }

    fn searches(&self) -> Vec<SearchQuery> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl CourseIndex for RecordingIndex {
    async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        self.searches.lock().unwrap().push(query.clone());
        self.inner.search(query).await
    }

    async fn course_outline(&self, course_name: &str) -> Result<CourseOutline, CatalogError> {
        self.outline_requests
            .lock()
            .unwrap()
            .push(course_name.to_string());
        self.inner.course_outline(course_name).await
    }

    async fn lesson_link(&self, course_title: &str, lesson_number: u32) -> Option<String> {
        self.inner.lesson_link(course_title, lesson_number).await
    }

    async fn course_link(&self, course_title: &str) -> Option<String> {
        self.inner.course_link(course_title).await
    }

    async fn course_titles(&self) -> Result<Vec<String>, CatalogError> {
        self.inner.course_titles().await
    }
}

fn catalog() -> InMemoryCourseIndex {
    let x = CourseOutline::new("X")
        .with_link("https://example.com/x")
        .with_instructor("Ada")
        .with_lesson(LessonEntry::new(
            1,
            "Getting Started",
            Some("https://example.com/x/1".to_string()),
        ))
        .with_lesson(LessonEntry::new(2, "Going Further", None));

    InMemoryCourseIndex::new(5)
        .with_course(
            x,
            vec![
                (1, "Install the toolchain and create a project."),
                (2, "Traits describe shared behavior across types."),
            ],
        )
        .unwrap()
}

struct Harness {
    handler: AnswerQuestionHandler,
    index: Arc<RecordingIndex>,
    sessions: Arc<InMemorySessionStore>,
}

fn harness(provider: MockAIProvider) -> Harness {
    let index = Arc::new(RecordingIndex::new(catalog()));
    let shared: Arc<dyn CourseIndex> = index.clone();

    let mut registry = ToolRegistry::new();
    registry
        .register(CourseSearchTool::new(shared.clone()))
        .unwrap();
    registry.register(CourseOutlineTool::new(shared)).unwrap();

    let sessions = Arc::new(InMemorySessionStore::default());
    let engine = AnswerEngine::new(Arc::new(provider), EngineConfig::default());
    let handler = AnswerQuestionHandler::new(engine, Arc::new(registry), sessions.clone());

    Harness {
        handler,
        index,
        sessions,
    }
}

fn tool_result_texts(content: &MessageContent) -> Vec<String> {
    match content {
        MessageContent::Blocks(blocks) => blocks
            .iter()
            .filter_map(|block| match block {
                ContentBlock::ToolResult(result) => Some(result.content().to_string()),
                _ => None,
            })
            .collect(),
        MessageContent::Text(_) => Vec::new(),
    }
}

// =============================================================================
// Outline questions
// =============================================================================

#[tokio::test]
async fn outline_question_dispatches_outline_tool_once() {
    let provider = MockAIProvider::new()
        .with_tool_use("toolu_1", "get_course_outline", json!({"course_name": "X"}))
        .with_response("Course X has two lessons.");
    let h = harness(provider.clone());

    let result = h
        .handler
        .handle(AnswerQuestionCommand::new("What lessons are in course X?"))
        .await
        .unwrap();

    assert_eq!(result.answer, "Course X has two lessons.");
    assert_eq!(h.index.outline_requests(), vec!["X".to_string()]);
    assert!(h.index.searches().is_empty());
    assert!(result.sources.is_empty());
    assert_eq!(provider.call_count(), 2);

    let calls = provider.get_calls();
    let follow_up = calls[1].messages.last().unwrap();
    assert_eq!(follow_up.role, MessageRole::User);
    assert_eq!(
        tool_result_texts(&follow_up.content),
        vec![
            "Course: X\nLink: https://example.com/x\nInstructor: Ada\nLessons:\n\
             1. Getting Started (https://example.com/x/1)\n2. Going Further"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn unknown_course_outline_is_reported_to_the_llm() {
    let provider = MockAIProvider::new()
        .with_tool_use(
            "toolu_1",
            "get_course_outline",
            json!({"course_name": "Cooking"}),
        )
        .with_response("I could not find that course.");
    let h = harness(provider.clone());

    let result = h
        .handler
        .handle(AnswerQuestionCommand::new("Outline of Cooking?"))
        .await
        .unwrap();

    assert_eq!(result.answer, "I could not find that course.");
    let calls = provider.get_calls();
    assert_eq!(
        tool_result_texts(&calls[1].messages.last().unwrap().content),
        vec!["No course found matching 'Cooking'".to_string()]
    );
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn second_question_sees_first_exchange() {
    let provider = MockAIProvider::new()
        .with_response("Install the toolchain first.")
        .with_response("Then learn traits.");
    let h = harness(provider.clone());
    let session_id = h.sessions.create_session().await.unwrap();

    h.handler
        .handle(AnswerQuestionCommand::new("How do I start?").in_session(session_id))
        .await
        .unwrap();
    h.handler
        .handle(AnswerQuestionCommand::new("And after that?").in_session(session_id))
        .await
        .unwrap();

    let calls = provider.get_calls();
    let first_system = calls[0].system_prompt.clone().unwrap();
    let second_system = calls[1].system_prompt.clone().unwrap();
    assert!(!first_system.contains("Previous conversation:"));
    assert!(second_system.ends_with(
        "\n\nPrevious conversation:\nUser: How do I start?\nAssistant: Install the toolchain first."
    ));

    assert_eq!(
        h.sessions.history(&session_id).await.unwrap().unwrap(),
        "User: How do I start?\nAssistant: Install the toolchain first.\n\
         User: And after that?\nAssistant: Then learn traits."
    );
}

#[tokio::test]
async fn history_window_drops_oldest_exchange() {
    let provider = MockAIProvider::new()
        .with_response("a1")
        .with_response("a2")
        .with_response("a3");
    let h = harness(provider);
    let session_id = h.sessions.create_session().await.unwrap();

    for question in ["q1", "q2", "q3"] {
        h.handler
            .handle(AnswerQuestionCommand::new(question).in_session(session_id))
            .await
            .unwrap();
    }

    assert_eq!(
        h.sessions.history(&session_id).await.unwrap().unwrap(),
        "User: q2\nAssistant: a2\nUser: q3\nAssistant: a3"
    );
}

// =============================================================================
// Citations
// =============================================================================

#[tokio::test]
async fn search_sources_are_returned_once() {
    let provider = MockAIProvider::new()
        .with_tool_use(
            "toolu_1",
            "search_course_content",
            json!({"query": "traits", "course_name": "X", "lesson_number": 2}),
        )
        .with_response("Traits describe shared behavior.")
        .with_response("Hello!");
    let h = harness(provider.clone());

    let first = h
        .handler
        .handle(AnswerQuestionCommand::new("What are traits?"))
        .await
        .unwrap();
    let second = h
        .handler
        .handle(AnswerQuestionCommand::new("Hi"))
        .await
        .unwrap();

    // Lesson 2 has no link of its own.
    assert_eq!(first.sources, vec![Source::new("X - Lesson 2", None)]);
    assert!(second.sources.is_empty());

    let searches = h.index.searches();
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].course_name.as_deref(), Some("X"));
    assert_eq!(searches[0].lesson_number, Some(2));

    let calls = provider.get_calls();
    assert_eq!(
        tool_result_texts(&calls[1].messages.last().unwrap().content),
        vec!["[X - Lesson 2]\nTraits describe shared behavior across types.".to_string()]
    );
}

#[tokio::test]
async fn two_rounds_then_forced_final_answer() {
    let provider = MockAIProvider::new()
        .with_tool_calls(vec![ToolCallRequest::new(
            "toolu_1",
            "search_course_content",
            json!({"query": "toolchain"}),
        )])
        .with_tool_use("toolu_2", "get_course_outline", json!({"course_name": "X"}))
        .with_response("Final answer.");
    let h = harness(provider.clone());

    let result = h
        .handler
        .handle(AnswerQuestionCommand::new("Tell me everything about X"))
        .await
        .unwrap();

    assert_eq!(result.answer, "Final answer.");
    assert_eq!(provider.call_count(), 3);
    let calls = provider.get_calls();
    assert!(calls[0].has_tools());
    assert!(calls[1].has_tools());
    assert!(!calls[2].has_tools());

    // The outline call in round two does not wipe the round-one citation.
    assert_eq!(
        result.sources,
        vec![Source::new(
            "X - Lesson 1",
            Some("https://example.com/x/1".to_string())
        )]
    );
}

#[tokio::test]
async fn unknown_tool_error_is_fed_back() {
    let provider = MockAIProvider::new()
        .with_tool_use("toolu_1", "summarize", json!({}))
        .with_response("Sorry.");
    let h = harness(provider.clone());

    let result = h
        .handler
        .handle(AnswerQuestionCommand::new("Summarize"))
        .await
        .unwrap();

    assert_eq!(result.answer, "Sorry.");
    let calls = provider.get_calls();
    assert_eq!(
        tool_result_texts(&calls[1].messages.last().unwrap().content),
        vec!["Error executing tool: Tool 'summarize' not found".to_string()]
    );
}
