//! Resource estimation for a large program by extrapolating from smaller instances.
//!
//! Pipeline:
//! 1. fit the max-graph-degree metric (always linear) and the measurement-step metric
//!    (configured family) against the configured step counts
//! 2. project both to the target step count
//! 3. build a synthetic graph record from the projections plus the target program's
//!    exact gate counts
//! 4. run the downstream resource step on that record
//! 5. re-wrap its report with the exact node and gate counts and the extrapolation
//!    provenance

use tracing::{debug_span, info};

use crate::domain::{
    CurveFamily, ExtrapolatedGraphData, ExtrapolatedResourceInfo, ExtrapolationConfig,
    ExtrapolationProvenance, FitResult, GraphData, ResourceInfo, Sample, TargetProgram,
};
use crate::error::AppError;
use crate::estimate::downstream::GraphResourceEstimator;
use crate::fit::{MIN_FIT_POINTS, fit_and_project};

/// Extrapolating resource estimator.
#[derive(Debug, Clone)]
pub struct ExtrapolationEstimator<E> {
    config: ExtrapolationConfig,
    downstream: E,
}

impl<E> ExtrapolationEstimator<E> {
    /// Validate `config` and wrap `downstream`.
    pub fn new(config: ExtrapolationConfig, downstream: E) -> Result<Self, AppError> {
        validate_config(&config)?;
        Ok(Self { config, downstream })
    }

    pub fn config(&self) -> &ExtrapolationConfig {
        &self.config
    }

    /// Steps 1-3 only: the synthetic graph record for `program`.
    pub fn extrapolated_graph_data(
        &self,
        program: &TargetProgram,
        samples: &[Sample],
    ) -> Result<ExtrapolatedGraphData, AppError> {
        extrapolate_graph_data(&self.config, program, samples)
    }
}

impl<E: GraphResourceEstimator> ExtrapolationEstimator<E> {
    /// Full resource report for `program`, using only measurements from smaller sizes.
    ///
    /// Node and gate counts in the report always come from `program`, whatever the
    /// downstream step returns for them.
    pub fn estimate_via_extrapolation(
        &self,
        program: &TargetProgram,
        samples: &[Sample],
    ) -> Result<ExtrapolatedResourceInfo, AppError> {
        let _span =
            debug_span!("estimate_via_extrapolation", target_steps = program.steps).entered();

        let extrapolated = self.extrapolated_graph_data(program, samples)?;
        let base = self
            .downstream
            .estimate_resources_from_graph_data(&extrapolated.graph)?;

        Ok(ExtrapolatedResourceInfo {
            resources: ResourceInfo {
                n_nodes: program.n_nodes,
                n_t_gates: program.n_t_gates,
                n_rotation_gates: program.n_rotation_gates,
                ..base
            },
            extrapolation: ExtrapolationProvenance {
                n_logical_qubits_r_squared: extrapolated.max_graph_degree_r_squared,
                n_measurement_steps_r_squared: extrapolated.n_measurement_steps_r_squared,
                data_used_to_extrapolate: samples.to_vec(),
                steps_to_extrapolate_to: program.steps,
            },
        })
    }
}

/// Build the extrapolated graph record for `program` from `samples`.
///
/// `samples` must line up one-to-one with `config.steps_to_extrapolate_from`.
pub fn extrapolate_graph_data(
    config: &ExtrapolationConfig,
    program: &TargetProgram,
    samples: &[Sample],
) -> Result<ExtrapolatedGraphData, AppError> {
    let _span = debug_span!(
        "extrapolate_graph_data",
        target_steps = program.steps,
        n_samples = samples.len()
    )
    .entered();

    validate_config(config)?;
    check_alignment(&config.steps_to_extrapolate_from, samples)?;

    let steps: Vec<f64> = config
        .steps_to_extrapolate_from
        .iter()
        .map(|&s| s as f64)
        .collect();
    let degrees: Vec<f64> = samples.iter().map(|s| s.max_graph_degree).collect();
    let measurement_steps: Vec<f64> = samples.iter().map(|s| s.n_measurement_steps).collect();
    let target = program.steps as f64;
    let steps_family = config.n_measurement_steps_fit_type;

    // The two fits are independent; run them side by side.
    let (degree_fit, steps_fit) = rayon::join(
        || fit_metric("max_graph_degree", CurveFamily::Linear, &steps, &degrees, target),
        || fit_metric("n_measurement_steps", steps_family, &steps, &measurement_steps, target),
    );
    let degree_fit = degree_fit?;
    let steps_fit = steps_fit?;

    let n_nodes = program
        .n_t_gates
        .checked_add(program.n_rotation_gates)
        .ok_or_else(|| AppError::input("n_t_gates + n_rotation_gates overflows"))?;

    let graph = GraphData {
        max_graph_degree: to_count("max_graph_degree", &degree_fit)?,
        n_measurement_steps: to_count("n_measurement_steps", &steps_fit)?,
        n_nodes,
        n_t_gates: program.n_t_gates,
        n_rotation_gates: program.n_rotation_gates,
    };

    info!(
        target_steps = program.steps,
        max_graph_degree = graph.max_graph_degree,
        max_graph_degree_r_squared = degree_fit.r_squared,
        n_measurement_steps = graph.n_measurement_steps,
        n_measurement_steps_r_squared = steps_fit.r_squared,
        fit_type = %steps_family,
        "extrapolated graph data"
    );

    Ok(ExtrapolatedGraphData {
        graph,
        max_graph_degree_r_squared: degree_fit.r_squared,
        n_measurement_steps_r_squared: steps_fit.r_squared,
    })
}

fn fit_metric(
    metric: &str,
    family: CurveFamily,
    steps: &[f64],
    values: &[f64],
    target: f64,
) -> Result<FitResult, AppError> {
    fit_and_project(family, steps, values, target)
        .map_err(|e| e.context(format!("{metric} ({family} fit)")))
}

fn to_count(metric: &str, fit: &FitResult) -> Result<u64, AppError> {
    u64::try_from(fit.projected).map_err(|_| {
        AppError::degenerate(format!(
            "{metric} ({} fit): projected count {} is negative",
            fit.family, fit.projected
        ))
    })
}

fn validate_config(config: &ExtrapolationConfig) -> Result<(), AppError> {
    let steps = &config.steps_to_extrapolate_from;
    if steps.len() < MIN_FIT_POINTS {
        return Err(AppError::config(format!(
            "steps_to_extrapolate_from needs at least {MIN_FIT_POINTS} step counts, got {}",
            steps.len()
        )));
    }
    if steps.contains(&0) {
        return Err(AppError::config(
            "steps_to_extrapolate_from must contain only positive step counts",
        ));
    }
    Ok(())
}

fn check_alignment(configured: &[u64], samples: &[Sample]) -> Result<(), AppError> {
    if configured.len() != samples.len() {
        return Err(AppError::config(format!(
            "configured {} step counts to extrapolate from, but got {} samples",
            configured.len(),
            samples.len()
        )));
    }
    for (i, (sample, &step)) in samples.iter().zip(configured).enumerate() {
        if sample.steps != step {
            return Err(AppError::config(format!(
                "sample {i} was measured at {} steps, expected {step}",
                sample.steps
            )));
        }
    }
    Ok(())
}
