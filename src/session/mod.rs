//! Interactive game sessions.
//!
//! A session wraps a [`Pentagon`] with what a presentation layer needs
//! around it: an optional goal, an undoable move history and the set of
//! configurations already visited.

use crate::core::{
    Direction, MoveHistory, MoveRecord, Pentagon, PentagonError, StateKey, Vertices,
};
use crate::goal::Goal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Bookkeeping tracked alongside a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// Last time a move, undo or reset changed the session
    pub updated_at: DateTime<Utc>,

    /// Moves played, including ones later undone
    pub total_moves: usize,

    /// Number of undone moves
    pub undos: usize,
}

impl Default for SessionMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            total_moves: 0,
            undos: 0,
        }
    }
}

/// Result of playing one move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutcome {
    /// Configuration before the move
    pub previous: Vertices,
    /// Canonical key of the configuration after the move
    pub key: StateKey,
    /// Whether this session had not seen `key` before
    pub first_visit: bool,
    /// Whether the goal is met after the move
    pub solved: bool,
}

/// A pentagon being played, with history and goal.
///
/// # Example
///
/// ```rust
/// use pentagon::core::{Direction, Pentagon, INITIAL_VERTICES};
/// use pentagon::goal::Goal;
/// use pentagon::session::GameSession;
///
/// let mut session = GameSession::new(Pentagon::new())
///     .with_goal(Goal::Target { vertices: INITIAL_VERTICES })
///     .unwrap();
/// assert!(session.is_won());
///
/// let outcome = session.play(2, Direction::Forward).unwrap();
/// assert!(outcome.first_visit);
/// assert!(!outcome.solved);
///
/// session.undo().unwrap();
/// assert!(session.is_won());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    pentagon: Pentagon,
    initial: Vertices,
    goal: Option<Goal>,
    history: MoveHistory,
    visited: BTreeSet<StateKey>,
    metadata: SessionMetadata,
}

impl GameSession {
    /// Start a session from the pentagon's current configuration.
    pub fn new(pentagon: Pentagon) -> Self {
        let initial = *pentagon.vertices();
        let visited = BTreeSet::from([pentagon.state_key()]);
        Self {
            pentagon,
            initial,
            goal: None,
            history: MoveHistory::new(),
            visited,
            metadata: SessionMetadata::default(),
        }
    }

    /// Attach a goal. Fails if the goal can never be evaluated.
    pub fn with_goal(mut self, goal: Goal) -> Result<Self, PentagonError> {
        goal.validate()?;
        self.goal = Some(goal);
        Ok(self)
    }

    pub(crate) fn from_parts(
        pentagon: Pentagon,
        initial: Vertices,
        goal: Option<Goal>,
        history: MoveHistory,
        mut visited: BTreeSet<StateKey>,
        metadata: SessionMetadata,
    ) -> Self {
        visited.insert(pentagon.state_key());
        Self {
            pentagon,
            initial,
            goal,
            history,
            visited,
            metadata,
        }
    }

    pub fn pentagon(&self) -> &Pentagon {
        &self.pentagon
    }

    /// Configuration the session started from.
    pub fn initial(&self) -> &Vertices {
        &self.initial
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }

    /// Canonical keys of every configuration seen since the last reset.
    pub fn visited(&self) -> &BTreeSet<StateKey> {
        &self.visited
    }

    pub fn select_move_type(&mut self, tag: &str) -> Result<(), PentagonError> {
        self.pentagon.select_move_type(tag)
    }

    /// Apply the current move to `vertex` and record it.
    pub fn play(&mut self, vertex: usize, direction: Direction) -> Result<MoveOutcome, PentagonError> {
        let move_type = self.pentagon.current_move();
        let previous = self.pentagon.apply_move(vertex, direction)?;
        let after = *self.pentagon.vertices();

        self.history.push(MoveRecord {
            vertex,
            move_type,
            direction,
            before: previous,
            after,
            timestamp: Utc::now(),
        });
        self.metadata.total_moves += 1;
        self.metadata.updated_at = Utc::now();

        let key = self.pentagon.state_key();
        let first_visit = self.visited.insert(key);
        let solved = self.is_won();
        if solved {
            tracing::info!(moves = self.history.len(), state = %key, "goal reached");
        }

        Ok(MoveOutcome {
            previous,
            key,
            first_visit,
            solved,
        })
    }

    /// Undo the most recent move by restoring the configuration before it.
    ///
    /// Returns the undone record, or `None` if no moves remain.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.pentagon.set_vertices(record.before);
        self.metadata.undos += 1;
        self.metadata.updated_at = Utc::now();
        tracing::debug!(vertex = record.vertex, move_type = %record.move_type, "undid move");
        Some(record)
    }

    /// Return to the starting configuration and forget history.
    pub fn reset(&mut self) {
        self.pentagon.set_vertices(self.initial);
        self.history = MoveHistory::new();
        self.visited = BTreeSet::from([self.pentagon.state_key()]);
        self.metadata.updated_at = Utc::now();
    }

    /// Whether the goal is met. Always false without a goal.
    pub fn is_won(&self) -> bool {
        self.goal
            .as_ref()
            .is_some_and(|goal| goal.is_met(&self.pentagon).unwrap_or(false))
    }

    /// Moves currently on the history (undone moves excluded).
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    pub fn unique_states(&self) -> usize {
        self.visited.len()
    }
}
