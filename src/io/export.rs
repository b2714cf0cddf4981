//! JSON exports.
//!
//! Exports wrap the computed record in a small envelope (tool name, generation
//! timestamp, the inputs it was computed from) so a file can be traced back to
//! the run that produced it.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ExtrapolatedGraphData, ExtrapolationConfig, TargetProgram};
use crate::error::AppError;

/// Saved extrapolated graph record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub program: TargetProgram,
    pub config: ExtrapolationConfig,
    pub graph_data: ExtrapolatedGraphData,
}

impl GraphExport {
    pub fn new(
        program: TargetProgram,
        config: ExtrapolationConfig,
        graph_data: ExtrapolatedGraphData,
    ) -> Self {
        Self {
            tool: "rex".to_string(),
            generated_at: Utc::now(),
            program,
            config,
            graph_data,
        }
    }
}

/// Write `value` as pretty JSON to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create export JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, value)
        .map_err(|e| AppError::io(format!("Failed to write export JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GraphData;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rex-{}-{name}", std::process::id()))
    }

    #[test]
    fn graph_export_reloads() {
        let export = GraphExport::new(
            TargetProgram {
                steps: 1000,
                n_nodes: 12_000,
                n_t_gates: 10_000,
                n_rotation_gates: 2_000,
            },
            ExtrapolationConfig::new(vec![10, 20, 30]),
            ExtrapolatedGraphData {
                graph: GraphData {
                    max_graph_degree: 10_000,
                    n_measurement_steps: 76,
                    n_nodes: 12_000,
                    n_t_gates: 10_000,
                    n_rotation_gates: 2_000,
                },
                max_graph_degree_r_squared: 1.0,
                n_measurement_steps_r_squared: 0.75,
            },
        );
        let path = temp_path("graph.json");
        write_json(&path, &export).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let back: GraphExport = serde_json::from_str(&text).unwrap();
        assert_eq!(back, export);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["config"]["n_measurement_steps_fit_type"], "logarithmic");
        assert_eq!(json["tool"], "rex");
    }

    #[test]
    fn write_to_missing_directory_is_io_error() {
        let err = write_json(Path::new("/nonexistent/dir/out.json"), &1u8).unwrap_err();
        assert!(err.is_io());
    }
}
