//! Conversation session configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Conversation session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Exchanges (question plus answer) retained per session
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_history == 0 {
            return Err(ValidationError::MustBePositive("max_history"));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
        }
    }
}

fn default_max_history() -> usize {
    2
}
