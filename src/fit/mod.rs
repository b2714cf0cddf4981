//! Curve-fit engine.
//!
//! One entry point, [`fit_and_project`]: a least-squares line through the samples
//! (optionally in `ln(x)`), evaluated at a query point, plus R².

pub mod fitter;

pub use fitter::*;
