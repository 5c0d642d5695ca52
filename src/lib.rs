//! Pentagon: a complex-number puzzle on the five vertices of a pentagon.
//!
//! Each vertex holds a complex number. A move adds a fixed delta to one
//! vertex and another fixed delta to both of its neighbors; reversing the
//! move subtracts them. The core is a pure transition function over a
//! fixed-size vertex array, wrapped by a small stateful shell.
//!
//! # Modules
//!
//! - [`core`]: vertices, adjacency, the move table, `Pentagon`, state keys
//!   and move history
//! - [`builder`]: validated construction of a `Pentagon`
//! - [`goal`]: win conditions
//! - [`session`]: undoable play with revisit tracking
//! - [`puzzle`]: puzzle definitions and their validation
//! - [`matrix`]: transition matrices and the firing-matrix inverse check
//! - [`checkpoint`]: JSON and binary snapshots of a session
//!
//! # Example
//!
//! ```rust
//! use pentagon::core::{Direction, Pentagon};
//! use pentagon::Complex64;
//!
//! let mut pentagon = Pentagon::new();
//! pentagon.select_move_type("A").unwrap();
//! pentagon.apply_move(0, Direction::Forward).unwrap();
//!
//! assert_eq!(pentagon.vertices()[0], Complex64::new(3.0, 5.0));
//! assert_eq!(pentagon.state_key().to_string(), "[3+5i, 1+0i, 2+2i, 3+4i, 0+3i]");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod goal;
pub mod matrix;
pub mod puzzle;
pub mod session;

pub use num_complex::Complex64;

// Re-export commonly used types
pub use builder::{BuildError, PentagonBuilder};
pub use core::{Direction, MoveType, Pentagon, PentagonError, StateKey, Vertices};
pub use goal::Goal;
pub use session::GameSession;
