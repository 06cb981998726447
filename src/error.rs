//! Error types for the puzzle solver

use thiserror::Error;

/// Everything that can go wrong between parsing a board and finishing a search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Input text is not a permutation of the ten digits
    #[error("invalid state {input:?}: {reason}")]
    InvalidState { input: String, reason: String },

    /// Frontier ran dry before the goal was dequeued
    #[error("search exhausted after {expanded} expansions without reaching the goal")]
    SearchExhausted { expanded: usize },

    /// The expansion budget ran out first
    #[error("expansion limit of {limit} reached")]
    ExpansionLimit { limit: usize },

    /// Start and goal sit in different parity classes
    #[error("goal is unreachable from start (permutation parity differs)")]
    Unsolvable,
}

impl PuzzleError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        PuzzleError::InvalidState {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
