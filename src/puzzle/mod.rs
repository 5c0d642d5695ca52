//! Puzzle definitions.
//!
//! A puzzle names a start configuration and the goal to reach from it.
//! Definitions usually arrive as JSON, so they are validated before a
//! session is opened on them.
//!
//! # Example
//!
//! ```rust
//! use pentagon::core::Direction;
//! use pentagon::puzzle::Puzzle;
//!
//! let puzzle = Puzzle::from_json(r#"{
//!     "id": "1-1",
//!     "name": "Meet Move A",
//!     "difficulty": "easy",
//!     "par": 1,
//!     "start_state": [[-1, -1], [1, 0], [0, 0], [0, 0], [1, 0]],
//!     "goal": "all-zeros"
//! }"#).unwrap();
//!
//! let mut session = puzzle.start().unwrap();
//! let outcome = session.play(0, Direction::Forward).unwrap();
//! assert!(outcome.solved);
//! ```

use crate::core::{Pentagon, Vertices};
use crate::session::GameSession;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

pub mod goal;
pub mod rules;
pub mod violations;

pub use goal::PuzzleGoal;
pub use violations::{PuzzleError, PuzzleViolation};

/// How hard a puzzle is meant to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A start configuration and the goal to reach from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    /// Number of moves in a known optimal solution
    pub par: usize,
    pub start_state: Vec<Complex64>,
    pub goal: PuzzleGoal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Puzzle {
    /// Parse a puzzle definition from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        serde_json::from_str(json).map_err(|e| PuzzleError::ParseFailed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, PuzzleError> {
        serde_json::to_string_pretty(self).map_err(|e| PuzzleError::ParseFailed(e.to_string()))
    }

    /// Every rule this puzzle breaks.
    pub fn violations(&self) -> Vec<PuzzleViolation> {
        match rules::validate(self) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    /// Validate the puzzle and open a session at its start state.
    pub fn start(&self) -> Result<GameSession, PuzzleError> {
        let violations = self.violations();
        if !violations.is_empty() {
            tracing::warn!(
                puzzle = %self.id,
                violations = violations.len(),
                "rejected invalid puzzle"
            );
            return Err(self.invalid(violations));
        }

        let start = Vertices::try_from(self.start_state.as_slice()).map_err(|_| {
            self.invalid(vec![PuzzleViolation::StartLength {
                found: self.start_state.len(),
            }])
        })?;

        let goal = self.goal.to_goal()?;
        Ok(GameSession::new(Pentagon::with_vertices(start)).with_goal(goal)?)
    }

    /// Stars earned for solving in `moves`: three at or under par, two
    /// within one and a half times par, one otherwise.
    pub fn stars(&self, moves: usize) -> u8 {
        if moves <= self.par {
            3
        } else if moves.saturating_mul(2) <= self.par.saturating_mul(3) {
            2
        } else {
            1
        }
    }

    fn invalid(&self, violations: Vec<PuzzleViolation>) -> PuzzleError {
        PuzzleError::Invalid {
            id: self.id.clone(),
            violations,
        }
    }
}
