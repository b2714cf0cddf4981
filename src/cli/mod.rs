//! Command-line parsing for the `rex` binary.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting and estimation code.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::CurveFamily;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "rex",
    version,
    about = "Extrapolate fault-tolerant resource metrics from smaller program instances"
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit one metric and project it to a query point.
    Fit(FitArgs),
    /// Build the extrapolated graph data for a request file.
    Extrapolate(ExtrapolateArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Curve family for the fit.
    #[arg(long, value_enum, default_value_t = CurveFamily::Linear)]
    pub family: CurveFamily,

    /// Independent values (step counts), comma separated.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
    pub x: Vec<f64>,

    /// Dependent values (metric observations), comma separated.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
    pub y: Vec<f64>,

    /// Point to project to.
    #[arg(long, allow_negative_numbers = true)]
    pub at: f64,
}

#[derive(Debug, Parser, Clone)]
pub struct ExtrapolateArgs {
    /// Request JSON (target program, samples, step counts, fit type).
    #[arg(long, value_name = "JSON")]
    pub input: PathBuf,

    /// Curve family for the measurement-step metric (overrides the request file).
    #[arg(long, value_enum)]
    pub fit_type: Option<CurveFamily>,

    /// Write the extrapolated graph data to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fit_command() {
        let cli = Cli::parse_from([
            "rex",
            "fit",
            "--family",
            "logarithmic",
            "--x",
            "10,20,30",
            "--y",
            "50,53.5,56.3",
            "--at",
            "1000",
        ]);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.family, CurveFamily::Logarithmic);
        assert_eq!(args.x, vec![10.0, 20.0, 30.0]);
        assert_eq!(args.y, vec![50.0, 53.5, 56.3]);
        assert_eq!(args.at, 1000.0);
    }

    #[test]
    fn rejects_unknown_family() {
        let res = Cli::try_parse_from([
            "rex",
            "fit",
            "--family",
            "exponential",
            "--x",
            "1,2",
            "--y",
            "1,2",
            "--at",
            "3",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn parses_extrapolate_with_verbosity() {
        let cli = Cli::parse_from([
            "rex",
            "-vv",
            "extrapolate",
            "--input",
            "req.json",
            "--fit-type",
            "linear",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Extrapolate(args) = cli.command else {
            panic!("expected extrapolate");
        };
        assert_eq!(args.fit_type, Some(CurveFamily::Linear));
        assert!(args.export.is_none());
    }
}
