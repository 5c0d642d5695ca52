//! Builder for configuring a pentagon.

use crate::builder::error::BuildError;
use crate::core::{MoveType, Pentagon, Vertices, INITIAL_VERTICES, WIN_TOLERANCE};
use num_complex::Complex64;

/// Builder for constructing a pentagon with a fluent API.
///
/// Every setting is optional: an empty builder produces the same pentagon
/// as [`Pentagon::new`].
#[derive(Clone, Debug)]
pub struct PentagonBuilder {
    vertices: Vec<Complex64>,
    move_type: Result<MoveType, String>,
    win_tolerance: f64,
}

impl PentagonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            vertices: INITIAL_VERTICES.to_vec(),
            move_type: Ok(MoveType::default()),
            win_tolerance: WIN_TOLERANCE,
        }
    }

    /// Set the starting configuration.
    pub fn vertices(mut self, values: &[Complex64]) -> Self {
        self.vertices = values.to_vec();
        self
    }

    /// Select the starting move type by tag.
    pub fn move_type(mut self, tag: &str) -> Self {
        self.move_type = tag.parse().map_err(|_| tag.to_string());
        self
    }

    /// Tolerance used by win checks.
    pub fn win_tolerance(mut self, tolerance: f64) -> Self {
        self.win_tolerance = tolerance;
        self
    }

    /// Build the pentagon.
    /// Returns an error if any setting is invalid.
    pub fn build(self) -> Result<Pentagon, BuildError> {
        let vertices: Vertices =
            self.vertices
                .as_slice()
                .try_into()
                .map_err(|_| BuildError::InvalidConfigurationLength {
                    found: self.vertices.len(),
                })?;

        if let Some(vertex) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(BuildError::NonFiniteValue { vertex });
        }

        if !self.win_tolerance.is_finite() || self.win_tolerance <= 0.0 {
            return Err(BuildError::InvalidTolerance {
                tolerance: self.win_tolerance,
            });
        }

        let move_type = self
            .move_type
            .map_err(|tag| BuildError::InvalidMoveType { tag })?;

        Ok(Pentagon::from_parts(vertices, move_type, self.win_tolerance))
    }
}

impl Default for PentagonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
