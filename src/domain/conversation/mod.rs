//! Conversation module - Bounded per-session history.
//!
//! Only the user's question and the final answer of each exchange are kept;
//! the multi-round tool exchange inside the answer engine never lands here.

mod history;
mod turn;

pub use history::{ConversationHistory, DEFAULT_MAX_EXCHANGES};
pub use turn::{ConversationTurn, TurnRole};
