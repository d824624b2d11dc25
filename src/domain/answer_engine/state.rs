//! Round loop states.

use crate::domain::tools::ToolCallRequest;

/// Where the answer engine is in its round loop.
///
/// ```text
/// Reasoning --(no tool use)--------------------> Terminated
/// Reasoning --(tool use, no dispatcher)---------> Terminated
/// Reasoning --(tool use)-----------------------> Retrieving
/// Retrieving --(rounds < limit)-----------------> Reasoning
/// Retrieving --(rounds == limit)----------------> Exhausted
/// Exhausted --(final call without tools)--------> Terminated
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EngineState {
    /// About to ask the LLM, tools offered.
    Reasoning { rounds_completed: u32 },

    /// The LLM asked for these calls; results not yet produced.
    Retrieving {
        rounds_completed: u32,
        calls: Vec<ToolCallRequest>,
    },

    /// Round limit reached; one final call without tools remains.
    Exhausted,

    /// Final answer text.
    Terminated(String),
}

impl EngineState {
    /// Initial state for a given round limit.
    pub fn initial(max_tool_rounds: u32) -> Self {
        if max_tool_rounds == 0 {
            Self::Exhausted
        } else {
            Self::Reasoning {
                rounds_completed: 0,
            }
        }
    }

    /// State after a round of tool results has been appended.
    pub fn after_round(rounds_completed: u32, max_tool_rounds: u32) -> Self {
        if rounds_completed >= max_tool_rounds {
            Self::Exhausted
        } else {
            Self::Reasoning { rounds_completed }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_reasons_when_rounds_allowed() {
        assert_eq!(
            EngineState::initial(2),
            EngineState::Reasoning {
                rounds_completed: 0,
            }
        );
    }

    #[test]
    fn zero_round_limit_goes_straight_to_exhausted() {
        assert_eq!(EngineState::initial(0), EngineState::Exhausted);
    }

    #[test]
    fn after_last_round_is_exhausted() {
        assert_eq!(
            EngineState::after_round(1, 2),
            EngineState::Reasoning {
                rounds_completed: 1,
            }
        );
        assert_eq!(EngineState::after_round(2, 2), EngineState::Exhausted);
    }
}
