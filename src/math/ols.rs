//! Least squares solver and straight-line fitting.
//!
//! Every fit in this crate is a small ordinary least squares problem:
//!
//! ```text
//! minimize Σ (y_i - (m·x_i + c))^2
//! ```
//!
//! The design matrix `[x, 1]` is tall whenever more than two samples are supplied,
//! so we solve through SVD. (Nalgebra's `QR::solve` is intended for square systems
//! and will panic for non-square matrices.)

use nalgebra::{DMatrix, DVector};

use crate::error::AppError;

/// Singular values below this are treated as zero.
const SVD_EPS: f64 = 1e-12;

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the solution is not finite.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let beta = x.clone().svd(true, true).solve(y, SVD_EPS).ok()?;
    beta.iter().all(|v| v.is_finite()).then_some(beta)
}

/// Least squares line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    /// Residual sum of squares at the sample points.
    pub sse: f64,
}

impl LineFit {
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a straight line to `(x, y)`.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LineFit, AppError> {
    if x.len() != y.len() {
        return Err(AppError::input(format!(
            "independent and dependent values differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 2 {
        return Err(AppError::input(format!("a line fit needs at least 2 points, got {n}")));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(AppError::input("fit inputs must be finite"));
    }
    if x.iter().all(|&v| v == x[0]) {
        return Err(AppError::degenerate(format!(
            "a line fit needs at least 2 distinct independent values, all are {}",
            x[0]
        )));
    }

    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { x[i] } else { 1.0 });
    let rhs = DVector::from_column_slice(y);
    let beta = solve_least_squares(&design, &rhs)
        .ok_or_else(|| AppError::degenerate("least squares solution is not finite"))?;

    let mut fit = LineFit {
        slope: beta[0],
        intercept: beta[1],
        sse: 0.0,
    };
    fit.sse = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let r = yi - fit.eval(xi);
            r * r
        })
        .sum();

    Ok(fit)
}
