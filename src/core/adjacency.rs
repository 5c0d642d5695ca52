//! Fixed neighbor structure of the pentagon.
//!
//! Vertices are numbered 0..=4 clockwise and form the 5-cycle
//! 0-1-2-3-4-0. Every vertex has exactly two neighbors.

use super::error::PentagonError;

/// Number of vertices on the pentagon.
pub const VERTEX_COUNT: usize = 5;

/// Neighbors of each vertex, indexed by vertex.
pub const NEIGHBORS: [[usize; 2]; VERTEX_COUNT] = [[1, 4], [0, 2], [1, 3], [2, 4], [3, 0]];

/// Validate a vertex index.
pub fn check_vertex(index: usize) -> Result<usize, PentagonError> {
    if index < VERTEX_COUNT {
        Ok(index)
    } else {
        Err(PentagonError::InvalidVertex {
            index,
            max: VERTEX_COUNT - 1,
        })
    }
}

/// The two neighbors of `index`.
///
/// # Example
///
/// ```rust
/// use pentagon::core::neighbors;
///
/// assert_eq!(neighbors(0).unwrap(), [1, 4]);
/// assert!(neighbors(5).is_err());
/// ```
pub fn neighbors(index: usize) -> Result<[usize; 2], PentagonError> {
    check_vertex(index).map(|i| NEIGHBORS[i])
}

/// Whether `a` and `b` are adjacent. Out-of-range indices are never adjacent.
pub fn are_adjacent(a: usize, b: usize) -> bool {
    neighbors(a).is_ok_and(|n| n.contains(&b))
}
