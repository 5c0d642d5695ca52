//! Saving and restoring game sessions.
//!
//! A checkpoint captures everything needed to resume a session: the
//! pentagon, its starting point, goal, history, visited states and
//! metadata. Checkpoints encode as JSON for inspection or bincode for
//! compact storage.

use crate::core::{MoveHistory, Pentagon, StateKey, Vertices};
use crate::goal::Goal;
use crate::session::{GameSession, SessionMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a [`GameSession`].
///
/// # Example
///
/// ```rust
/// use pentagon::checkpoint::Checkpoint;
/// use pentagon::core::{Direction, Pentagon};
/// use pentagon::session::GameSession;
///
/// let mut session = GameSession::new(Pentagon::new());
/// session.play(1, Direction::Forward).unwrap();
///
/// let bytes = Checkpoint::capture(&session).to_bytes().unwrap();
/// let restored = Checkpoint::from_bytes(&bytes).unwrap().restore().unwrap();
///
/// assert_eq!(restored.pentagon(), session.pentagon());
/// assert_eq!(restored.moves_made(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Configuration the session started from
    pub initial: Vertices,

    /// Pentagon as it was when captured
    pub pentagon: Pentagon,

    pub goal: Option<Goal>,

    pub history: MoveHistory,

    pub visited: BTreeSet<StateKey>,

    pub metadata: SessionMetadata,
}

impl Checkpoint {
    pub fn capture(session: &GameSession) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial: *session.initial(),
            pentagon: session.pentagon().clone(),
            goal: session.goal().cloned(),
            history: session.history().clone(),
            visited: session.visited().clone(),
            metadata: session.metadata().clone(),
        }
    }

    /// Rebuild the session, rejecting checkpoints that don't hang together.
    pub fn restore(self) -> Result<GameSession, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let tolerance = self.pentagon.win_tolerance();
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(CheckpointError::InvalidTolerance { tolerance });
        }

        if let Some(last) = self.history.last() {
            if &last.after != self.pentagon.vertices() {
                return Err(CheckpointError::HistoryMismatch {
                    history_end: StateKey::from_vertices(&last.after).to_string(),
                    stored: self.pentagon.state_key().to_string(),
                });
            }
        }

        if let Some(goal) = &self.goal {
            goal.validate()?;
        }

        tracing::info!(
            checkpoint = %self.id,
            moves = self.history.len(),
            "restored session from checkpoint"
        );

        Ok(GameSession::from_parts(
            self.pentagon,
            self.initial,
            self.goal,
            self.history,
            self.visited,
            self.metadata,
        ))
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::EncodeFailed {
            format: "json",
            message: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DecodeFailed {
            format: "json",
            message: e.to_string(),
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::EncodeFailed {
            format: "bincode",
            message: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::DecodeFailed {
            format: "bincode",
            message: e.to_string(),
        })
    }
}
