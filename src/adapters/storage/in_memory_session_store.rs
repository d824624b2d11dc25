//! In-Memory Session Store Adapter
//!
//! Keeps each session's bounded history in memory for the life of the
//! process. Nothing is written to disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::{ConversationHistory, TurnRole, DEFAULT_MAX_EXCHANGES};
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for conversation history
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, ConversationHistory>>>,
    max_exchanges: usize,
}

impl InMemorySessionStore {
    /// Create a store retaining `max_exchanges` question/answer pairs per session
    pub fn new(max_exchanges: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_exchanges,
        }
    }

    /// Get the number of known sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn empty_history(&self) -> ConversationHistory {
        ConversationHistory::with_max_exchanges(self.max_exchanges)
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EXCHANGES)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(&self) -> Result<SessionId, SessionStoreError> {
        let session_id = SessionId::new();
        self.sessions
            .write()
            .await
            .insert(session_id, self.empty_history());
        tracing::debug!(session_id = %session_id, "Created session");
        Ok(session_id)
    }

    async fn history(&self, session_id: &SessionId) -> Result<Option<String>, SessionStoreError> {
        let sessions = self.sessions.read().await;
        let history = sessions.get(session_id);
        Ok(history.and_then(ConversationHistory::render))
    }

    async fn append(
        &self,
        session_id: &SessionId,
        role: TurnRole,
        text: &str,
    ) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(*session_id)
            .or_insert_with(|| self.empty_history())
            .append(role, text);
        Ok(())
    }

    async fn clear(&self, session_id: &SessionId) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions
            .get_mut(session_id)
            .map(ConversationHistory::clear)
            .ok_or(SessionStoreError::NotFound(*session_id))
    }
}
