//! Formatted terminal output for fits, graph records and resource reports.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized
//!
//! Extrapolated reports are rendered as the base report followed by the
//! extrapolation-specific lines; the data types themselves carry no display logic.

use crate::domain::{
    CurveFamily, ExtrapolatedGraphData, ExtrapolatedResourceInfo, ExtrapolationProvenance,
    FitResult, ResourceInfo, Sample,
};

/// One fit-and-project result.
pub fn format_fit_result(fit: &FitResult, query_point: f64) -> String {
    let mut out = String::new();
    let x = match fit.family {
        CurveFamily::Linear => "x",
        CurveFamily::Logarithmic => "ln(x)",
    };
    out.push_str(&format!(
        "Fit: {} | y = {:.6}·{x} + {:.6}\n",
        fit.family, fit.slope, fit.intercept
    ));
    out.push_str(&format!("R²: {}\n", fit.r_squared));
    out.push_str(&format!("Projected at {query_point}: {}\n", fit.projected));
    out
}

/// Synthetic graph record built for the target size.
pub fn format_graph_data(data: &ExtrapolatedGraphData, target_steps: u64) -> String {
    let g = &data.graph;
    let mut out = String::new();
    out.push_str(&format!("=== extrapolated graph data (steps={target_steps}) ===\n"));
    out.push_str(&format!(
        "max_graph_degree: {} (R²={})\n",
        g.max_graph_degree, data.max_graph_degree_r_squared
    ));
    out.push_str(&format!(
        "n_measurement_steps: {} (R²={})\n",
        g.n_measurement_steps, data.n_measurement_steps_r_squared
    ));
    out.push_str(&format!("n_nodes: {}\n", g.n_nodes));
    out.push_str(&format!("n_t_gates: {}\n", g.n_t_gates));
    out.push_str(&format!("n_rotation_gates: {}\n", g.n_rotation_gates));
    out
}

/// Base resource report, one `name: value` line per field.
pub fn format_resource_info(info: &ResourceInfo) -> String {
    let lines = [
        ("n_logical_qubits", info.n_logical_qubits.to_string()),
        ("n_measurement_steps", info.n_measurement_steps.to_string()),
        ("n_nodes", info.n_nodes.to_string()),
        ("n_t_gates", info.n_t_gates.to_string()),
        ("n_rotation_gates", info.n_rotation_gates.to_string()),
        ("code_distance", info.code_distance.to_string()),
        ("logical_error_rate", format!("{:e}", info.logical_error_rate)),
        ("total_time_in_seconds", info.total_time_in_seconds.to_string()),
        ("n_physical_qubits", info.n_physical_qubits.to_string()),
        ("decoder_total_energy_consumption", fmt_opt(info.decoder_total_energy_consumption)),
        ("decoder_power", fmt_opt(info.decoder_power)),
        ("decoder_area", fmt_opt(info.decoder_area)),
        ("max_decodable_distance", fmt_opt(info.max_decodable_distance)),
    ];
    let parts: Vec<String> = lines.iter().map(|(name, value)| format!("{name}: {value}")).collect();
    parts.join("\n")
}

/// Extrapolated report: the base report, then fit quality, target and source data.
pub fn format_extrapolated_report(report: &ExtrapolatedResourceInfo) -> String {
    let mut out = format_resource_info(&report.resources);
    out.push('\n');
    out.push_str(&format_provenance(&report.extrapolation));
    out
}

fn format_provenance(p: &ExtrapolationProvenance) -> String {
    let mut out = String::new();
    out.push_str(&format!("n_logical_qubits_r_squared: {}\n", p.n_logical_qubits_r_squared));
    out.push_str(&format!(
        "n_measurement_steps_r_squared: {}\n",
        p.n_measurement_steps_r_squared
    ));
    out.push_str(&format!("steps_to_extrapolate_to: {}\n", p.steps_to_extrapolate_to));
    out.push_str("data_used_to_extrapolate:\n");
    out.push_str(&format_samples(&p.data_used_to_extrapolate));
    out
}

/// Table of small-instance samples.
pub fn format_samples(samples: &[Sample]) -> String {
    let mut out = String::new();
    let header = format!(
        "{:>10} {:>18} {:>20}",
        "steps", "max_graph_degree", "n_measurement_steps"
    );
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(format!("{:->10} {:->18} {:->20}", "", "", "").trim_end());
    out.push('\n');
    for s in samples {
        let row = format!(
            "{:>10} {:>18} {:>20}",
            s.steps, s.max_graph_degree, s.n_measurement_steps
        );
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

fn fmt_opt<T: std::fmt::Display>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "n/a".to_string())
}
