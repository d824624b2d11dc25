//! AnswerQuestionHandler - One user question in, one cited answer out

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::answer_engine::AnswerEngine;
use crate::domain::catalog::Source;
use crate::domain::foundation::SessionId;
use crate::domain::tools::ToolRegistry;
use crate::ports::{AIError, SessionStore, SessionStoreError};

/// Framing added in front of every question handed to the engine.
pub const QUESTION_PREFIX: &str = "Answer this question about course materials: ";

/// Command to answer a question
#[derive(Debug, Clone)]
pub struct AnswerQuestionCommand {
    pub question: String,
    pub session_id: Option<SessionId>,
}

impl AnswerQuestionCommand {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            session_id: None,
        }
    }

    pub fn in_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }
}

/// Result of answering a question
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerQuestionResult {
    pub answer: String,
    pub sources: Vec<Source>,
}

/// Error type for answering questions
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerQuestionError {
    /// The LLM could not be reached or answered with an error
    #[error("AI Provider error: {0}")]
    AIProvider(String),

    /// History could not be read or written
    #[error("Session error: {0}")]
    Session(String),
}

impl From<AIError> for AnswerQuestionError {
    fn from(err: AIError) -> Self {
        AnswerQuestionError::AIProvider(err.to_string())
    }
}

impl From<SessionStoreError> for AnswerQuestionError {
    fn from(err: SessionStoreError) -> Self {
        AnswerQuestionError::Session(err.to_string())
    }
}

/// Handler for answering course questions.
///
/// Owns the per-query discipline around the engine: look up history, run the
/// engine with every registered tool, drain citations, record the exchange.
/// Queries run one at a time through the query lane so citations from one
/// question can never be drained by another.
pub struct AnswerQuestionHandler {
    engine: AnswerEngine,
    registry: Arc<ToolRegistry>,
    sessions: Arc<dyn SessionStore>,
    lane: Mutex<()>,
}

impl AnswerQuestionHandler {
    pub fn new(
        engine: AnswerEngine,
        registry: Arc<ToolRegistry>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            engine,
            registry,
            sessions,
            lane: Mutex::new(()),
        }
    }

    pub async fn handle(
        &self,
        cmd: AnswerQuestionCommand,
    ) -> Result<AnswerQuestionResult, AnswerQuestionError> {
        let _lane = self.lane.lock().await;

        // 1. History only exists within a session
        let history = match &cmd.session_id {
            Some(session_id) => self.sessions.history(session_id).await?,
            None => None,
        };

        // 2. Run the engine with every registered tool
        let prompt = format!("{}{}", QUESTION_PREFIX, cmd.question);
        let definitions = self.registry.definitions();
        let outcome = self
            .engine
            .answer(
                &prompt,
                history.as_deref(),
                Some(definitions.as_slice()),
                Some(self.registry.as_ref()),
            )
            .await;

        // 3. Drain even on failure so nothing leaks into the next question
        let sources = self.registry.drain_sources().await;
        let answer = outcome.map_err(|err| {
            tracing::error!(error = %err, "Answer engine failed");
            AnswerQuestionError::from(err)
        })?;

        // 4. Record the raw question, not the framed prompt
        if let Some(session_id) = &cmd.session_id {
            self.sessions
                .append_exchange(session_id, &cmd.question, &answer)
                .await?;
        }

        tracing::info!(
            session_id = ?cmd.session_id,
            sources = sources.len(),
            "Answered question"
        );

        Ok(AnswerQuestionResult { answer, sources })
    }
}
