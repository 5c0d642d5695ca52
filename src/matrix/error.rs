//! Matrix error types.

use thiserror::Error;

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatrixError {
    /// No usable pivot was found while eliminating this column
    #[error("Matrix is singular (no pivot in column {column})")]
    Singular { column: usize },
}
