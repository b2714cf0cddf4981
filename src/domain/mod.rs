//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - fit configuration (`CurveFamily`, `ExtrapolationConfig`)
//! - small-instance measurements (`Sample`) and the target descriptor (`TargetProgram`)
//! - fit outputs (`FitResult`) and the records built from them
//!   (`GraphData`, `ExtrapolatedGraphData`, `ResourceInfo`, `ExtrapolatedResourceInfo`)

pub mod types;

pub use types::*;
