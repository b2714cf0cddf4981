//! Mathematical utilities: curve-family transforms, least squares, statistics.

pub mod ols;
pub mod stats;
pub mod transform;

pub use ols::*;
pub use stats::*;
pub use transform::*;
