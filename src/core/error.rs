//! Errors raised by the pentagon core.

use thiserror::Error;

/// Errors raised by pentagon operations.
///
/// Every variant is a local precondition violation (an invalid argument).
/// None of them leave the pentagon in a partially updated state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PentagonError {
    #[error("Invalid vertex index: {index} (expected 0..={max})")]
    InvalidVertex { index: usize, max: usize },

    #[error("Invalid move type: {tag:?} (expected one of A, B, C, D)")]
    InvalidMoveType { tag: String },

    #[error("Invalid direction: {direction:?} (expected add or subtract)")]
    InvalidDirection { direction: String },

    #[error("Configuration must have exactly {expected} complex numbers (got {found})")]
    InvalidConfigurationLength { expected: usize, found: usize },

    #[error("Goal must have exactly {expected} complex numbers (got {found})")]
    GoalLengthMismatch { expected: usize, found: usize },

    #[error("Configuration has a non-finite value at vertex {vertex}")]
    NonFiniteValue { vertex: usize },
}

impl PentagonError {
    /// Whether the error is an invalid-argument condition.
    ///
    /// Always true today; kept as a method so callers don't match on
    /// variants to classify errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidVertex { .. }
                | Self::InvalidMoveType { .. }
                | Self::InvalidDirection { .. }
                | Self::InvalidConfigurationLength { .. }
                | Self::GoalLengthMismatch { .. }
                | Self::NonFiniteValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = PentagonError::InvalidVertex { index: 7, max: 4 };
        assert_eq!(err.to_string(), "Invalid vertex index: 7 (expected 0..=4)");

        let err = PentagonError::InvalidMoveType {
            tag: "E".to_string(),
        };
        assert!(err.to_string().contains("\"E\""));

        let err = PentagonError::InvalidConfigurationLength {
            expected: 5,
            found: 3,
        };
        assert!(err.to_string().contains("got 3"));
    }

    #[test]
    fn all_variants_are_invalid_arguments() {
        let errors = [
            PentagonError::InvalidVertex { index: 5, max: 4 },
            PentagonError::InvalidMoveType { tag: "x".into() },
            PentagonError::InvalidDirection {
                direction: "up".into(),
            },
            PentagonError::InvalidConfigurationLength {
                expected: 5,
                found: 0,
            },
            PentagonError::GoalLengthMismatch {
                expected: 5,
                found: 6,
            },
            PentagonError::NonFiniteValue { vertex: 2 },
        ];
        assert!(errors.iter().all(PentagonError::is_invalid_argument));
    }
}
