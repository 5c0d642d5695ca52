//! Move history tracking.
//!
//! Records every applied move together with the configuration before and
//! after it. Histories are values: recording or rewinding returns a new
//! history and leaves the original alone.

use super::moves::{Direction, MoveType, Vertices};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Vertex the move was applied to
    pub vertex: usize,
    /// Move rule that was applied
    pub move_type: MoveType,
    /// Whether the deltas were added or subtracted
    pub direction: Direction,
    /// Configuration before the move
    pub before: Vertices,
    /// Configuration after the move
    pub after: Vertices,
    /// When the move was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied moves.
///
/// # Example
///
/// ```rust
/// use pentagon::core::{transition, Direction, MoveHistory, MoveRecord, MoveType, INITIAL_VERTICES};
/// use chrono::Utc;
///
/// let after = transition(&INITIAL_VERTICES, 2, MoveType::B, Direction::Forward).unwrap();
/// let history = MoveHistory::new().record(MoveRecord {
///     vertex: 2,
///     move_type: MoveType::B,
///     direction: Direction::Forward,
///     before: INITIAL_VERTICES,
///     after,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[0], &INITIAL_VERTICES);
/// assert_eq!(path[1], &after);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a move, returning a new history.
    pub fn record(&self, record: MoveRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Append a move in place.
    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Remove the most recent move in place.
    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    /// Split off the most recent move.
    ///
    /// Returns the removed record and the history without it, or `None`
    /// when the history is empty.
    pub fn rewind(&self) -> Option<(MoveRecord, Self)> {
        let (last, rest) = self.records.split_last()?;
        Some((
            last.clone(),
            Self {
                records: rest.to_vec(),
            },
        ))
    }

    /// Configurations visited, in order: the configuration before the first
    /// move, then the configuration after each move.
    pub fn get_path(&self) -> Vec<&Vertices> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.before);
        }
        for record in &self.records {
            path.push(&record.after);
        }
        path
    }

    /// Time between the first and last recorded move.
    ///
    /// Returns `None` if there are no moves.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
