//! Extrapolation request files (JSON).
//!
//! A request bundles everything the estimator needs besides the downstream step:
//!
//! ```json
//! {
//!   "program": { "steps": 1000, "n_nodes": 12000, "n_t_gates": 10000, "n_rotation_gates": 2000 },
//!   "steps_to_extrapolate_from": [10, 20, 30],
//!   "n_measurement_steps_fit_type": "logarithmic",
//!   "samples": [ { "steps": 10, "max_graph_degree": 100, "n_measurement_steps": 50 }, ... ]
//! }
//! ```
//!
//! `steps_to_extrapolate_from` defaults to the samples' own step counts and the fit
//! type defaults to logarithmic. The fit type is kept as a string here and parsed
//! into a [`CurveFamily`] when the configuration is built, so an unknown value is
//! reported as a configuration error rather than a JSON error.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{CurveFamily, ExtrapolationConfig, Sample, TargetProgram};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtrapolationRequest {
    pub program: TargetProgram,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_to_extrapolate_from: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_measurement_steps_fit_type: Option<String>,
    pub samples: Vec<Sample>,
}

impl ExtrapolationRequest {
    /// Resolve the estimator configuration. `fit_type` overrides the file's value.
    pub fn config(&self, fit_type: Option<CurveFamily>) -> Result<ExtrapolationConfig, AppError> {
        let family = match (fit_type, &self.n_measurement_steps_fit_type) {
            (Some(family), _) => family,
            (None, Some(name)) => name.parse()?,
            (None, None) => CurveFamily::default(),
        };
        let steps = self
            .steps_to_extrapolate_from
            .clone()
            .unwrap_or_else(|| self.samples.iter().map(|s| s.steps).collect());

        Ok(ExtrapolationConfig::new(steps).with_fit_type(family))
    }
}

/// Read a request JSON file.
pub fn read_request_json(path: &Path) -> Result<ExtrapolationRequest, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!("Failed to open request JSON '{}': {e}", path.display()))
    })?;
    parse_request(file)
}

pub fn parse_request(reader: impl std::io::Read) -> Result<ExtrapolationRequest, AppError> {
    serde_json::from_reader(reader)
        .map_err(|e| AppError::io(format!("Invalid request JSON: {e}")))
}
