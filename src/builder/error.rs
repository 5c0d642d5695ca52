//! Build errors for pentagon configuration.

use thiserror::Error;

/// Errors that can occur when building a pentagon.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial configuration must have exactly 5 complex numbers (got {found})")]
    InvalidConfigurationLength { found: usize },

    #[error("Initial configuration contains a non-finite value at vertex {vertex}")]
    NonFiniteValue { vertex: usize },

    #[error("Win tolerance must be finite and positive (got {tolerance})")]
    InvalidTolerance { tolerance: f64 },

    #[error("Unknown move type {tag:?}. Call .move_type() with A, B, C or D")]
    InvalidMoveType { tag: String },
}
