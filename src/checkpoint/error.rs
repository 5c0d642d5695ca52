//! Checkpoint error types.

use crate::core::PentagonError;
use thiserror::Error;

/// Errors raised while saving or restoring a session checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Failed to encode checkpoint as {format}: {message}")]
    EncodeFailed {
        format: &'static str,
        message: String,
    },

    #[error("Failed to decode {format} checkpoint: {message}")]
    DecodeFailed {
        format: &'static str,
        message: String,
    },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The last recorded move does not end in the stored configuration
    #[error("History ends at {history_end} but the checkpoint holds {stored}")]
    HistoryMismatch { history_end: String, stored: String },

    #[error("Checkpoint win tolerance {tolerance} is not finite and positive")]
    InvalidTolerance { tolerance: f64 },

    #[error("Checkpoint goal is unusable: {0}")]
    InvalidGoal(#[from] PentagonError),
}
