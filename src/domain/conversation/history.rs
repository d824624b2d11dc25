//! Bounded conversation window.

use std::collections::VecDeque;

use super::{ConversationTurn, TurnRole};

/// Exchanges (user + assistant pairs) retained by default.
pub const DEFAULT_MAX_EXCHANGES: usize = 2;

/// Ordered window of the most recent turns of one session.
///
/// Holds at most `max_turns` turns; the oldest are evicted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationHistory {
    max_turns: usize,
    turns: VecDeque<ConversationTurn>,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::with_max_exchanges(DEFAULT_MAX_EXCHANGES)
    }
}

impl ConversationHistory {
    /// Creates a window holding at most `max_turns` turns.
    pub fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            turns: VecDeque::with_capacity(max_turns),
        }
    }

    /// Creates a window sized for `exchanges` question/answer pairs.
    pub fn with_max_exchanges(exchanges: usize) -> Self {
        Self::new(exchanges * 2)
    }

    /// Appends a turn, evicting from the front when over capacity.
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.max_turns {
            self.turns.pop_front();
        }
    }

    /// Appends a turn built from a role and text.
    pub fn append(&mut self, role: TurnRole, text: impl Into<String>) {
        self.push(ConversationTurn::new(role, text));
    }

    /// Renders the retained window as a newline-joined transcript.
    ///
    /// Returns `None` rather than an empty string when nothing is retained.
    pub fn render(&self) -> Option<String> {
        if self.turns.is_empty() {
            return None;
        }
        Some(
            self.turns
                .iter()
                .map(ConversationTurn::render)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    pub fn turns(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
