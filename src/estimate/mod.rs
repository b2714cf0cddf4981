//! Extrapolation orchestration.
//!
//! Responsibilities:
//!
//! - pick the curve family per metric (degree: linear; measurement steps: configured)
//! - fit and project both metrics to the target step count
//! - assemble the synthetic graph record and pass it downstream
//! - attach extrapolation provenance to the downstream report

pub mod downstream;
pub mod extrapolation;

pub use downstream::*;
pub use extrapolation::*;
