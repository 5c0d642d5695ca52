//! Move table and the pure transition function.
//!
//! A move adds `vertex` to the chosen vertex and `adjacent` to each of its
//! two neighbors. Reversing a move negates both deltas, so a forward move
//! followed by the reverse of the same move restores the configuration.

use super::adjacency::{check_vertex, NEIGHBORS, VERTEX_COUNT};
use super::error::PentagonError;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Values held by the five vertices, in vertex order.
pub type Vertices = [Complex64; VERTEX_COUNT];

/// One of the four fixed move rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    #[default]
    A,
    B,
    C,
    D,
}

impl MoveType {
    /// Every move type, in table order.
    pub const ALL: [MoveType; 4] = [MoveType::A, MoveType::B, MoveType::C, MoveType::D];

    /// Deltas applied by this move in the forward direction.
    pub fn deltas(self) -> MoveDeltas {
        MOVE_TABLE[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveType {
    type Err = PentagonError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(PentagonError::InvalidMoveType {
                tag: other.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for MoveType {
    type Error = PentagonError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        let mut buf = [0u8; 4];
        tag.encode_utf8(&mut buf).parse()
    }
}

/// Whether a move's deltas are added as-is or negated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Add the deltas (left click).
    #[default]
    Forward,
    /// Subtract the deltas (right click).
    Reverse,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// `1.0` for forward, `-1.0` for reverse.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("add"),
            Self::Reverse => f.write_str("subtract"),
        }
    }
}

impl FromStr for Direction {
    type Err = PentagonError;

    fn from_str(direction: &str) -> Result<Self, Self::Err> {
        match direction {
            "add" | "forward" | "+" => Ok(Self::Forward),
            "subtract" | "reverse" | "-" => Ok(Self::Reverse),
            other => Err(PentagonError::InvalidDirection {
                direction: other.to_string(),
            }),
        }
    }
}

/// Pair of deltas a move adds to its target vertex and to each neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveDeltas {
    pub vertex: Complex64,
    pub adjacent: Complex64,
}

impl MoveDeltas {
    pub const fn new(vertex: Complex64, adjacent: Complex64) -> Self {
        Self { vertex, adjacent }
    }

    /// Deltas as applied in `direction`.
    pub fn directed(self, direction: Direction) -> Self {
        match direction {
            Direction::Forward => self,
            Direction::Reverse => Self::new(-self.vertex, -self.adjacent),
        }
    }
}

/// Deltas for each move, indexed by `MoveType as usize`.
pub const MOVE_TABLE: [MoveDeltas; 4] = [
    MoveDeltas::new(Complex64::new(1.0, 1.0), Complex64::new(-1.0, 0.0)),
    MoveDeltas::new(Complex64::new(-1.0, 1.0), Complex64::new(0.0, -1.0)),
    MoveDeltas::new(Complex64::new(1.0, -1.0), Complex64::new(1.0, 0.0)),
    MoveDeltas::new(Complex64::new(1.0, -1.0), Complex64::new(0.0, 1.0)),
];

/// Apply one move to a configuration without mutating it.
///
/// Returns the configuration that results from applying `move_type` in
/// `direction` to the vertex at `index`.
///
/// # Example
///
/// ```rust
/// use pentagon::core::{transition, Direction, MoveType, INITIAL_VERTICES};
/// use pentagon::Complex64;
///
/// let next = transition(&INITIAL_VERTICES, 0, MoveType::A, Direction::Forward).unwrap();
/// assert_eq!(next[0], Complex64::new(3.0, 5.0));
/// assert_eq!(next[1], Complex64::new(1.0, 0.0));
/// assert_eq!(next[4], Complex64::new(0.0, 3.0));
/// assert_eq!(next[2], INITIAL_VERTICES[2]);
/// ```
pub fn transition(
    vertices: &Vertices,
    index: usize,
    move_type: MoveType,
    direction: Direction,
) -> Result<Vertices, PentagonError> {
    let index = check_vertex(index)?;
    let deltas = move_type.deltas().directed(direction);

    let mut next = *vertices;
    next[index] += deltas.vertex;
    for neighbor in NEIGHBORS[index] {
        next[neighbor] += deltas.adjacent;
    }
    Ok(next)
}
