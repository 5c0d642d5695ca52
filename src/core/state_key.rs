//! Canonical identifiers for vertex configurations.
//!
//! A key rounds the real and imaginary part of every vertex to the nearest
//! integer (ties to even). Configurations closer than half a unit in every
//! component share a key, which is what revisit detection wants.
//!
//! Keys describe finite configurations only. NaN rounds to 0 and infinities
//! saturate, so `Pentagon::set_configuration` refuses non-finite values.

use super::adjacency::VERTEX_COUNT;
use super::moves::Vertices;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounded snapshot of a vertex vector.
///
/// # Example
///
/// ```rust
/// use pentagon::core::{Pentagon, StateKey};
/// use pentagon::Complex64;
///
/// let pentagon = Pentagon::new();
/// let key = pentagon.state_key();
/// assert_eq!(key.to_string(), "[2+4i, 2+0i, 2+2i, 3+4i, 1+3i]");
///
/// let mut nudged = *pentagon.vertices();
/// nudged[0] += Complex64::new(0.3, -0.4);
/// assert_eq!(StateKey::from_vertices(&nudged), key);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateKey([(i64, i64); VERTEX_COUNT]);

impl StateKey {
    pub fn from_vertices(vertices: &Vertices) -> Self {
        Self(vertices.map(|v| (round(v.re), round(v.im))))
    }

    /// Rounded `(re, im)` pairs in vertex order.
    pub fn components(&self) -> &[(i64, i64); VERTEX_COUNT] {
        &self.0
    }

    /// The integer configuration this key stands for.
    pub fn to_vertices(&self) -> Vertices {
        self.0.map(|(re, im)| Complex64::new(re as f64, im as f64))
    }
}

fn round(value: f64) -> i64 {
    value.round_ties_even() as i64
}

impl From<&Vertices> for StateKey {
    fn from(vertices: &Vertices) -> Self {
        Self::from_vertices(vertices)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (re, im)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{re}{im:+}i")?;
        }
        f.write_str("]")
    }
}
