//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs logging
//! - runs a single fit or builds extrapolated graph data from a request file
//! - prints reports and writes optional exports

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ExtrapolateArgs, FitArgs};
use crate::error::AppError;

/// Entry point for the `rex` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Extrapolate(args) => handle_extrapolate(args),
    }
}

/// Log to stderr so stdout stays clean for reports.
///
/// `RUST_LOG` (also read from `.env`) takes precedence over `-v`.
fn init_logging(verbose: u8) {
    dotenvy::dotenv().ok();

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,resource_extrapolation={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let fit = crate::fit::fit_and_project(args.family, &args.x, &args.y, args.at)?;
    print!("{}", crate::report::format_fit_result(&fit, args.at));
    Ok(())
}

fn handle_extrapolate(args: ExtrapolateArgs) -> Result<(), AppError> {
    let request = crate::io::read_request_json(&args.input)?;
    let config = request.config(args.fit_type)?;
    let graph =
        crate::estimate::extrapolate_graph_data(&config, &request.program, &request.samples)?;

    println!("{}", crate::report::format_graph_data(&graph, request.program.steps));
    println!("Fit type (n_measurement_steps): {}", config.n_measurement_steps_fit_type);
    println!("Data used to extrapolate:");
    print!("{}", crate::report::format_samples(&request.samples));

    if let Some(path) = &args.export {
        let export = crate::io::GraphExport::new(request.program, config, graph);
        crate::io::write_json(path, &export)?;
        info!(path = %path.display(), "wrote graph data export");
    }

    Ok(())
}
