//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between the fit engine, the estimator and the downstream resource step
//! - exported to JSON
//! - reloaded later for comparisons

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Transform applied to the independent variable before a degree-1 fit.
///
/// - `Linear`: `y = m·x + c`
/// - `Logarithmic`: `y = m·ln(x) + c` (every `x` must be strictly positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CurveFamily {
    Linear,
    #[default]
    Logarithmic,
}

impl CurveFamily {
    pub const ALL: [CurveFamily; 2] = [CurveFamily::Linear, CurveFamily::Logarithmic];

    /// Lowercase name, as accepted by [`FromStr`] and written to JSON.
    pub fn name(self) -> &'static str {
        match self {
            CurveFamily::Linear => "linear",
            CurveFamily::Logarithmic => "logarithmic",
        }
    }
}

impl std::fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveFamily {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        CurveFamily::ALL
            .into_iter()
            .find(|family| family.name() == normalized)
            .ok_or_else(|| {
                AppError::config(format!(
                    "n_measurement_steps_fit_type must be either 'logarithmic' or 'linear', \
                     not '{s}'"
                ))
            })
    }
}

/// Resource measurements taken on one smaller instance of the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Step count the instance was built with (independent variable).
    pub steps: u64,
    /// Max-graph-degree-like metric (tracks logical qubit count).
    pub max_graph_degree: f64,
    /// Number of sequential measurement rounds.
    pub n_measurement_steps: f64,
}

/// One fit-and-project outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub family: CurveFamily,
    pub slope: f64,
    pub intercept: f64,
    /// `ceil(round(m·x' + c, 5))` at the query point.
    pub projected: i64,
    /// Coefficient of determination. Not clamped: negative when the fit is worse
    /// than predicting the mean.
    pub r_squared: f64,
}

/// Exactly known structural properties of the target-size program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProgram {
    /// Step count to extrapolate to.
    pub steps: u64,
    pub n_nodes: u64,
    pub n_t_gates: u64,
    pub n_rotation_gates: u64,
}

/// Graph descriptor consumed by the downstream resource-computation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub max_graph_degree: u64,
    pub n_measurement_steps: u64,
    pub n_nodes: u64,
    pub n_t_gates: u64,
    pub n_rotation_gates: u64,
}

/// Synthetic graph descriptor for the target size, with the fit quality of the
/// two extrapolated fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrapolatedGraphData {
    pub graph: GraphData,
    pub max_graph_degree_r_squared: f64,
    pub n_measurement_steps_r_squared: f64,
}

/// Base (non-extrapolated) resource report produced by the downstream step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceInfo {
    pub n_logical_qubits: u64,
    pub n_measurement_steps: u64,
    pub n_nodes: u64,
    pub n_t_gates: u64,
    pub n_rotation_gates: u64,
    pub code_distance: u32,
    pub logical_error_rate: f64,
    pub total_time_in_seconds: f64,
    pub n_physical_qubits: u64,

    /// Decoder figures are absent when the downstream step ran without a decoder model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoder_total_energy_consumption: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoder_power: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoder_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_decodable_distance: Option<u32>,
}

/// Where an extrapolated report came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtrapolationProvenance {
    /// R² of the max-graph-degree fit (the metric standing in for logical qubits).
    pub n_logical_qubits_r_squared: f64,
    pub n_measurement_steps_r_squared: f64,
    pub data_used_to_extrapolate: Vec<Sample>,
    pub steps_to_extrapolate_to: u64,
}

/// Final report: a base report plus its extrapolation provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtrapolatedResourceInfo {
    pub resources: ResourceInfo,
    pub extrapolation: ExtrapolationProvenance,
}

/// Estimator configuration, fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrapolationConfig {
    /// Step counts of the smaller instances, aligned positionally with the samples.
    pub steps_to_extrapolate_from: Vec<u64>,
    /// Curve family for the measurement-step metric. The degree metric is always linear.
    #[serde(default)]
    pub n_measurement_steps_fit_type: CurveFamily,
}

impl ExtrapolationConfig {
    pub fn new(steps_to_extrapolate_from: Vec<u64>) -> Self {
        Self {
            steps_to_extrapolate_from,
            n_measurement_steps_fit_type: CurveFamily::default(),
        }
    }

    pub fn with_fit_type(mut self, family: CurveFamily) -> Self {
        self.n_measurement_steps_fit_type = family;
        self
    }
}
