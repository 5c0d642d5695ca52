//! Transition matrices of the pentagon moves.
//!
//! Applying a move forward to vertex `j` adds column `j` of the move's
//! transition matrix to the configuration. A matrix is built from a move's
//! deltas: the move's vertex delta on the diagonal and its adjacent delta
//! wherever two vertices are neighbors.
//!
//! The module also carries the reference firing matrix
//! `K̄ = (1+i)·I − i·adjacency` with its published closed-form inverse, and
//! the check that the two agree.

use crate::core::{are_adjacent, MoveDeltas, MoveType, Vertices, VERTEX_COUNT};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::ops::Mul;

pub mod error;

pub use error::MatrixError;

/// Square complex matrix over the pentagon's vertices.
pub type Matrix5 = [[Complex64; VERTEX_COUNT]; VERTEX_COUNT];

/// Pivots smaller than this are treated as zero.
const PIVOT_EPSILON: f64 = 1e-12;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// 5×5 complex matrix acting on vertex vectors.
///
/// # Example
///
/// ```rust
/// use pentagon::matrix::{reference_firing_inverse, TransitionMatrix};
///
/// let firing = TransitionMatrix::firing();
/// let check = firing.verify_inverse(&reference_firing_inverse()).unwrap();
///
/// assert!(check.is_verified(1e-10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionMatrix {
    entries: Matrix5,
}

/// Outcome of comparing a computed inverse against a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InverseCheck {
    /// Largest element-wise distance between computed and candidate inverse
    pub max_difference: f64,
    /// Largest element-wise distance of `matrix × candidate` from identity
    pub identity_deviation: f64,
}

impl InverseCheck {
    pub fn is_verified(&self, tolerance: f64) -> bool {
        self.max_difference < tolerance && self.identity_deviation < tolerance
    }
}

impl TransitionMatrix {
    pub fn new(entries: Matrix5) -> Self {
        Self { entries }
    }

    pub fn identity() -> Self {
        let mut entries = [[ZERO; VERTEX_COUNT]; VERTEX_COUNT];
        for (i, row) in entries.iter_mut().enumerate() {
            row[i] = ONE;
        }
        Self { entries }
    }

    /// Matrix with `deltas.vertex` on the diagonal and `deltas.adjacent`
    /// between neighbors.
    pub fn from_deltas(deltas: MoveDeltas) -> Self {
        let mut entries = [[ZERO; VERTEX_COUNT]; VERTEX_COUNT];
        for (i, row) in entries.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = if i == j {
                    deltas.vertex
                } else if are_adjacent(i, j) {
                    deltas.adjacent
                } else {
                    ZERO
                };
            }
        }
        Self { entries }
    }

    pub fn for_move(move_type: MoveType) -> Self {
        Self::from_deltas(move_type.deltas())
    }

    /// The reference firing matrix `K̄`: `1+i` on the diagonal, `-i`
    /// between neighbors.
    pub fn firing() -> Self {
        Self::from_deltas(MoveDeltas::new(
            Complex64::new(1.0, 1.0),
            Complex64::new(0.0, -1.0),
        ))
    }

    pub fn entries(&self) -> &Matrix5 {
        &self.entries
    }

    /// Multiply this matrix by a vertex vector.
    pub fn apply(&self, vector: &Vertices) -> Vertices {
        let mut result = [ZERO; VERTEX_COUNT];
        for (out, row) in result.iter_mut().zip(&self.entries) {
            *out = row.iter().zip(vector).map(|(a, b)| a * b).sum();
        }
        result
    }

    /// Scale every entry by `factor`.
    pub fn scale(&self, factor: Complex64) -> Self {
        Self {
            entries: self.entries.map(|row| row.map(|entry| entry * factor)),
        }
    }

    /// Invert by Gauss–Jordan elimination with partial pivoting.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let mut work = self.entries;
        let mut inverse = Self::identity().entries;

        for column in 0..VERTEX_COUNT {
            let pivot_row = (column..VERTEX_COUNT)
                .max_by(|&a, &b| work[a][column].norm().total_cmp(&work[b][column].norm()))
                .filter(|&row| work[row][column].norm() > PIVOT_EPSILON)
                .ok_or(MatrixError::Singular { column })?;

            work.swap(column, pivot_row);
            inverse.swap(column, pivot_row);

            let pivot = work[column][column];
            for j in 0..VERTEX_COUNT {
                work[column][j] /= pivot;
                inverse[column][j] /= pivot;
            }

            for row in 0..VERTEX_COUNT {
                if row == column {
                    continue;
                }
                let factor = work[row][column];
                if factor == ZERO {
                    continue;
                }
                for j in 0..VERTEX_COUNT {
                    let (w, v) = (work[column][j], inverse[column][j]);
                    work[row][j] -= factor * w;
                    inverse[row][j] -= factor * v;
                }
            }
        }

        Ok(Self { entries: inverse })
    }

    pub fn is_invertible(&self) -> bool {
        self.inverse().is_ok()
    }

    /// Largest element-wise distance to `other`.
    pub fn max_difference(&self, other: &Self) -> f64 {
        self.entries
            .iter()
            .flatten()
            .zip(other.entries.iter().flatten())
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max)
    }

    /// Compare the computed inverse of this matrix against `candidate`.
    pub fn verify_inverse(&self, candidate: &Self) -> Result<InverseCheck, MatrixError> {
        let computed = self.inverse()?;
        let check = InverseCheck {
            max_difference: computed.max_difference(candidate),
            identity_deviation: (*self * *candidate).max_difference(&Self::identity()),
        };
        tracing::debug!(
            max_difference = check.max_difference,
            identity_deviation = check.identity_deviation,
            "verified inverse"
        );
        Ok(check)
    }
}

impl Mul for TransitionMatrix {
    type Output = TransitionMatrix;

    fn mul(self, rhs: TransitionMatrix) -> TransitionMatrix {
        let mut entries = [[ZERO; VERTEX_COUNT]; VERTEX_COUNT];
        for (i, row) in entries.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = (0..VERTEX_COUNT)
                    .map(|k| self.entries[i][k] * rhs.entries[k][j])
                    .sum();
            }
        }
        TransitionMatrix { entries }
    }
}

/// Published closed-form inverse of [`TransitionMatrix::firing`].
///
/// `(1/6)·M` where `M` is circulant with first row
/// `[3-i, 1+i, -1+i, -1+i, 1+i]`.
pub fn reference_firing_inverse() -> TransitionMatrix {
    let c = Complex64::new;
    let first_row = [c(3.0, -1.0), c(1.0, 1.0), c(-1.0, 1.0), c(-1.0, 1.0), c(1.0, 1.0)];

    let mut entries = [[ZERO; VERTEX_COUNT]; VERTEX_COUNT];
    for (i, row) in entries.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = first_row[(j + VERTEX_COUNT - i) % VERTEX_COUNT];
        }
    }
    TransitionMatrix::new(entries).scale(c(1.0 / 6.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{transition, Direction, INITIAL_VERTICES};

    fn unit(index: usize) -> Vertices {
        let mut v = [ZERO; VERTEX_COUNT];
        v[index] = ONE;
        v
    }

    #[test]
    fn firing_matrix_matches_reference_layout() {
        let c = Complex64::new;
        let firing = TransitionMatrix::firing();
        assert_eq!(
            firing.entries()[0],
            [c(1.0, 1.0), c(0.0, -1.0), ZERO, ZERO, c(0.0, -1.0)]
        );
        assert_eq!(
            firing.entries()[2],
            [ZERO, c(0.0, -1.0), c(1.0, 1.0), c(0.0, -1.0), ZERO]
        );
    }

    #[test]
    fn reference_inverse_is_circulant() {
        let c = Complex64::new;
        let m = reference_firing_inverse().scale(c(6.0, 0.0));
        assert!(m.max_difference(&TransitionMatrix::new([
            [c(3.0, -1.0), c(1.0, 1.0), c(-1.0, 1.0), c(-1.0, 1.0), c(1.0, 1.0)],
            [c(1.0, 1.0), c(3.0, -1.0), c(1.0, 1.0), c(-1.0, 1.0), c(-1.0, 1.0)],
            [c(-1.0, 1.0), c(1.0, 1.0), c(3.0, -1.0), c(1.0, 1.0), c(-1.0, 1.0)],
            [c(-1.0, 1.0), c(-1.0, 1.0), c(1.0, 1.0), c(3.0, -1.0), c(1.0, 1.0)],
            [c(1.0, 1.0), c(-1.0, 1.0), c(-1.0, 1.0), c(1.0, 1.0), c(3.0, -1.0)],
        ])) < 1e-12);
    }

    #[test]
    fn computed_inverse_matches_reference() {
        let check = TransitionMatrix::firing()
            .verify_inverse(&reference_firing_inverse())
            .unwrap();

        assert!(check.max_difference < 1e-10, "{check:?}");
        assert!(check.identity_deviation < 1e-10, "{check:?}");
    }

    #[test]
    fn wrong_candidate_fails_verification() {
        let check = TransitionMatrix::firing()
            .verify_inverse(&TransitionMatrix::identity())
            .unwrap();
        assert!(!check.is_verified(1e-10));
    }

    #[test]
    fn every_move_matrix_is_invertible() {
        for move_type in MoveType::ALL {
            let matrix = TransitionMatrix::for_move(move_type);
            let inverse = matrix.inverse().unwrap();
            let deviation = (matrix * inverse).max_difference(&TransitionMatrix::identity());
            assert!(deviation < 1e-10, "{move_type}: {deviation}");
        }
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let singular = TransitionMatrix::from_deltas(MoveDeltas::new(ZERO, ZERO));
        assert_eq!(singular.inverse(), Err(MatrixError::Singular { column: 0 }));
        assert!(!singular.is_invertible());
    }

    #[test]
    fn columns_are_the_effect_of_one_move() {
        for move_type in MoveType::ALL {
            let matrix = TransitionMatrix::for_move(move_type);
            for index in 0..VERTEX_COUNT {
                let moved = transition(&INITIAL_VERTICES, index, move_type, Direction::Forward).unwrap();
                let column = matrix.apply(&unit(index));
                for vertex in 0..VERTEX_COUNT {
                    assert_eq!(moved[vertex], INITIAL_VERTICES[vertex] + column[vertex]);
                }
            }
        }
    }

    #[test]
    fn identity_is_neutral_for_products() {
        let firing = TransitionMatrix::firing();
        assert_eq!(firing * TransitionMatrix::identity(), firing);
        assert_eq!(TransitionMatrix::identity().apply(&INITIAL_VERTICES), INITIAL_VERTICES);
    }
}
