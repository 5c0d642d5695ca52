//! Core pentagon types and logic.
//!
//! This module contains the pure core of the puzzle:
//! - The fixed adjacency and move tables
//! - The pure transition function and the stateful `Pentagon` around it
//! - Canonical state keys and move history
//!
//! Nothing in this module performs I/O.

mod adjacency;
mod error;
mod history;
mod moves;
mod pentagon;
mod state_key;

pub use adjacency::{are_adjacent, check_vertex, neighbors, NEIGHBORS, VERTEX_COUNT};
pub use error::PentagonError;
pub use history::{MoveHistory, MoveRecord};
pub use moves::{transition, Direction, MoveDeltas, MoveType, Vertices, MOVE_TABLE};
pub use pentagon::{Pentagon, INITIAL_VERTICES, WIN_TOLERANCE};
pub use state_key::StateKey;
