//! `resource-extrapolation` library crate.
//!
//! Estimates physical resources for a large fault-tolerant program by fitting
//! trend curves to resource metrics measured on smaller instances and projecting
//! them to the target size.
//!
//! The binary (`rex`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the estimator can be embedded next to any downstream resource model

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;

pub use domain::{
    CurveFamily, ExtrapolatedGraphData, ExtrapolatedResourceInfo, ExtrapolationConfig, FitResult,
    GraphData, ResourceInfo, Sample, TargetProgram,
};
pub use error::{AppError, ErrorKind};
pub use estimate::{ExtrapolationEstimator, GraphResourceEstimator};
pub use fit::fit_and_project;
