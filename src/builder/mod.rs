//! Builder API for configuring a pentagon.
//!
//! This module provides a fluent builder and a literal macro for creating
//! pentagons with validated settings.

pub mod error;
pub mod macros;
pub mod pentagon;

pub use error::BuildError;
pub use pentagon::PentagonBuilder;
