//! Error types for game operations.

use thiserror::Error;

/// Errors produced when reading the number of decks.
///
/// Never fatal: callers substitute [`DEFAULT_DECKS`](crate::options::DEFAULT_DECKS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckCountError {
    /// Input is not an integer.
    #[error("deck count is not a number")]
    Malformed,
    /// Input is an integer outside 1..=6.
    #[error("deck count {0} is outside 1-6")]
    OutOfRange(i64),
}

/// Errors that can occur during round operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// A turn token other than `h` or `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown action")]
pub struct UnknownAction;
