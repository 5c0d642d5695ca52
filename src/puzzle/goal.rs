//! Goals as written in puzzle definitions.
//!
//! A definition's target is read as a plain list so a target of the wrong
//! length is reported alongside every other violation instead of failing
//! the parse.

use crate::core::{PentagonError, Vertices, VERTEX_COUNT};
use crate::goal::Goal;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// The goal of a puzzle, before its target length is known to be valid.
///
/// Serializes with the same tags as [`Goal`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PuzzleGoal {
    Target { vertices: Vec<Complex64> },
    AllZeros,
    NiceRepresentative { distinguished: usize },
}

impl PuzzleGoal {
    /// Convert into a [`Goal`] a pentagon can be checked against.
    ///
    /// A target that does not hold exactly five numbers fails with
    /// [`PentagonError::GoalLengthMismatch`].
    pub fn to_goal(&self) -> Result<Goal, PentagonError> {
        match self {
            Self::Target { vertices } => {
                let target = Vertices::try_from(vertices.as_slice()).map_err(|_| {
                    PentagonError::GoalLengthMismatch {
                        expected: VERTEX_COUNT,
                        found: vertices.len(),
                    }
                })?;
                Ok(Goal::Target { vertices: target })
            }
            Self::AllZeros => Ok(Goal::AllZeros),
            Self::NiceRepresentative { distinguished } => Ok(Goal::NiceRepresentative {
                distinguished: *distinguished,
            }),
        }
    }
}

impl From<Goal> for PuzzleGoal {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::Target { vertices } => Self::Target {
                vertices: vertices.to_vec(),
            },
            Goal::AllZeros => Self::AllZeros,
            Goal::NiceRepresentative { distinguished } => Self::NiceRepresentative { distinguished },
        }
    }
}
