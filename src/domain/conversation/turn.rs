//! A single recorded turn.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "User"),
            TurnRole::Assistant => write!(f, "Assistant"),
        }
    }
}

/// One entry in a session transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub text: String,
}

impl ConversationTurn {
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, text)
    }

    /// Transcript line, e.g. `"User: what is MCP?"`.
    pub fn render(&self) -> String {
        format!("{}: {}", self.role, self.text)
    }
}
