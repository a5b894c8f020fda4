//! Domain Value Objects
//!
//! Immutable value types for guard evaluation.

/// Which side of the conversation is being inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The player's message, before it reaches the model
    Input,
    /// The model's candidate reply, before it reaches the player
    Output,
}

impl Direction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::Input => "input",
            Direction::Output => "output",
        }
    }
}

/// Outcome of evaluating one message against a level's policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Block(BlockReason),
}

/// Why a message was blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// The literal secret appeared in an outbound reply (hard backstop)
    SecretLeak,
    /// A configured blacklist term matched
    BlacklistTerm,
    /// The LLM classifier judged the message a disclosure attempt
    ClassifierFlagged,
    /// The classifier was unreachable and the direction fails closed
    ClassifierUnavailable,
}

impl BlockReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BlockReason::SecretLeak => "secret_detected",
            BlockReason::BlacklistTerm => "blocked_term",
            BlockReason::ClassifierFlagged => "classifier_flagged",
            BlockReason::ClassifierUnavailable => "classifier_unavailable",
        }
    }
}

/// How a guard resolves when its classifier cannot answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailMode {
    /// Let the message through (bias against over-blocking questions)
    Open,
    /// Block the message (bias against leaking secrets)
    Closed,
}
