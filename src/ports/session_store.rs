//! Session Store Port - Interface for bounded conversation history.

use async_trait::async_trait;

use crate::domain::conversation::TurnRole;
use crate::domain::foundation::SessionId;

/// Errors that can occur during session store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for per-session conversation history.
///
/// Each session keeps a bounded window of recent turns. Appending beyond the
/// window evicts the oldest turns first.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Start a new, empty session.
    async fn create_session(&self) -> Result<SessionId, SessionStoreError>;

    /// Rendered transcript of the session, or `None` if it is unknown or empty.
    async fn history(&self, session_id: &SessionId) -> Result<Option<String>, SessionStoreError>;

    /// Append one turn. Unknown sessions are created implicitly.
    async fn append(
        &self,
        session_id: &SessionId,
        role: TurnRole,
        text: &str,
    ) -> Result<(), SessionStoreError>;

    /// Append a user question and the assistant's answer.
    async fn append_exchange(
        &self,
        session_id: &SessionId,
        question: &str,
        answer: &str,
    ) -> Result<(), SessionStoreError> {
        self.append(session_id, TurnRole::User, question).await?;
        self.append(session_id, TurnRole::Assistant, answer).await
    }

    /// Forget a session's turns.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::NotFound` for unknown sessions.
    async fn clear(&self, session_id: &SessionId) -> Result<(), SessionStoreError>;
}
