//! Puzzle validation errors.

use crate::core::PentagonError;
use thiserror::Error;

/// A single problem found in a puzzle definition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PuzzleViolation {
    #[error("Puzzle id is empty")]
    MissingId,

    #[error("Puzzle name is empty")]
    MissingName,

    #[error("Par must be at least one move")]
    ZeroPar,

    #[error("Start state must have exactly 5 complex numbers (got {found})")]
    StartLength { found: usize },

    #[error("Start state has a non-finite value at vertex {vertex}")]
    NonFiniteStart { vertex: usize },

    #[error("Goal target must have exactly 5 complex numbers (got {found})")]
    GoalLength { found: usize },

    #[error("Goal has a non-finite value at vertex {vertex}")]
    NonFiniteGoal { vertex: usize },

    #[error("Goal refers to vertex {vertex}, which does not exist")]
    GoalVertexOutOfRange { vertex: usize },

    #[error("Start state already satisfies the goal")]
    AlreadySolved,
}

/// Errors returned when loading or starting a puzzle.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The definition broke one or more rules
    #[error("Puzzle {id:?} failed validation with {} violation(s)", .violations.len())]
    Invalid {
        id: String,
        violations: Vec<PuzzleViolation>,
    },

    /// The puzzle was rejected by the pentagon itself
    #[error(transparent)]
    Pentagon(#[from] PentagonError),

    /// The definition could not be parsed
    #[error("Failed to parse puzzle: {0}")]
    ParseFailed(String),
}
