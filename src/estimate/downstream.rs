//! Seam to the downstream resource-computation step.
//!
//! Turning a graph descriptor into qubit counts, code distance, timing and decoder
//! figures needs a hardware and decoder model, which this crate does not own. The
//! estimator only hands the substituted graph record to whatever implements
//! [`GraphResourceEstimator`]; the implementor carries its own hardware/decoder
//! configuration.

use crate::domain::{GraphData, ResourceInfo};
use crate::error::AppError;

pub trait GraphResourceEstimator {
    /// Compute a base resource report for `graph`.
    fn estimate_resources_from_graph_data(&self, graph: &GraphData)
    -> Result<ResourceInfo, AppError>;
}

impl<F> GraphResourceEstimator for F
where
    F: Fn(&GraphData) -> Result<ResourceInfo, AppError>,
{
    fn estimate_resources_from_graph_data(
        &self,
        graph: &GraphData,
    ) -> Result<ResourceInfo, AppError> {
        self(graph)
    }
}
