//! Single-metric fit and projection.
//!
//! Given:
//! - a curve family (transform applied to the independent variable)
//! - independent values `x_i` (step counts of the small instances)
//! - dependent values `y_i` (one resource metric measured at each `x_i`)
//! - a query point (usually the target step count, beyond the sampled range)
//!
//! we fit `y = m·x' + c` by ordinary least squares, where `x'` is `x` or `ln(x)`,
//! and return the projection at the query point together with R².
//!
//! Resource counts are discrete and must never be under-reported, so the projection
//! is rounded to 5 decimals (absorbing floating-point noise from the solve) and then
//! rounded up to the next integer.

use tracing::{debug, debug_span};

use crate::domain::{CurveFamily, FitResult};
use crate::error::AppError;
use crate::math::{fit_line, mean, population_variance, round_to, transform, transform_all};

/// Fewest samples a degree-1 fit accepts. With exactly two, R² is always 1.
pub const MIN_FIT_POINTS: usize = 2;

/// Decimal places kept before rounding the projection up.
const PROJECTION_DECIMALS: i32 = 5;

/// Fit `family` to `(independent, dependent)` and project at `query_point`.
///
/// The line is fitted in mean-centred coordinates so that residuals scale with the
/// spread of the data rather than its magnitude. Dependent values whose variance is
/// within rounding of zero (see [`is_flat`]) are rejected as degenerate.
pub fn fit_and_project(
    family: CurveFamily,
    independent: &[f64],
    dependent: &[f64],
    query_point: f64,
) -> Result<FitResult, AppError> {
    let _span =
        debug_span!("fit_and_project", %family, n = independent.len(), query_point).entered();

    if independent.len() != dependent.len() {
        return Err(AppError::input(format!(
            "independent and dependent values differ in length ({} vs {})",
            independent.len(),
            dependent.len()
        )));
    }
    let n = dependent.len();
    if n < MIN_FIT_POINTS {
        return Err(AppError::input(format!(
            "curve fit needs at least {MIN_FIT_POINTS} points, got {n}"
        )));
    }
    if independent.iter().chain(dependent).any(|v| !v.is_finite()) || !query_point.is_finite() {
        return Err(AppError::input("fit inputs and query point must be finite"));
    }

    // Domain errors surface here, before any fit is attempted.
    let xs = transform_all(family, independent)?;
    let x_query = transform(family, query_point)?;

    let y_mean = mean(dependent);
    if is_flat(dependent, y_mean) {
        return Err(AppError::degenerate(format!(
            "dependent values are all equal to {y_mean} within rounding; \
             R² is undefined for zero variance"
        )));
    }

    let x_mean = mean(&xs);
    let xc: Vec<f64> = xs.iter().map(|x| x - x_mean).collect();
    let yc: Vec<f64> = dependent.iter().map(|y| y - y_mean).collect();
    let variance = population_variance(&yc);

    let centred = fit_line(&xc, &yc)?;
    let slope = centred.slope;
    let intercept = y_mean + centred.intercept - slope * x_mean;
    let r_squared = if n == MIN_FIT_POINTS {
        1.0
    } else {
        1.0 - centred.sse / (n as f64 * variance)
    };

    let raw = y_mean + centred.eval(x_query - x_mean);
    let projected = round_to(raw, PROJECTION_DECIMALS).ceil();
    if !projected.is_finite() || projected.abs() >= i64::MAX as f64 {
        return Err(AppError::degenerate(format!(
            "projection at {query_point} is out of range ({raw})"
        )));
    }

    debug!(slope, intercept, sse = centred.sse, r_squared, raw, "fit complete");

    Ok(FitResult {
        family,
        slope,
        intercept,
        projected: projected as i64,
        r_squared,
    })
}

/// True when the population variance of `values` is indistinguishable from zero.
///
/// A spread of one unit in the last place relative to `max(|mean|, 1)` per sample is
/// rounding, not signal: `variance <= (ε·max(|mean|, 1))² · n`.
pub fn is_flat(values: &[f64], mean: f64) -> bool {
    let scale = f64::EPSILON * mean.abs().max(1.0);
    population_variance(values) <= scale * scale * values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand::rngs::StdRng;
    use rand_distr::Normal;

    #[test]
    fn collinear_linear_data_fits_exactly() {
        let cases = [
            (10.0, 0.0, 1000.0),
            (2.5, 7.0, 400.0),
            (-0.75, 120.0, 90.0),
            (0.1, 0.3, 77.0),
        ];
        let xs = [4.0, 8.0, 16.0, 32.0];
        for (a, b, query) in cases {
            let ys: Vec<f64> = xs.iter().map(|x| a * x + b).collect();
            let fit = fit_and_project(CurveFamily::Linear, &xs, &ys, query).unwrap();
            assert_eq!(fit.r_squared, 1.0, "a={a} b={b}");
            let expected = round_to(a * query + b, 5).ceil() as i64;
            assert_eq!(fit.projected, expected, "a={a} b={b}");
        }
    }

    #[test]
    fn projection_rounds_up_fractional_counts() {
        // y = 0.8x + 2.5 at x = 10 is 10.5 -> 11
        let xs = [1.0, 2.0, 3.0, 4.0];
        let fit = fit_and_project(CurveFamily::Linear, &xs, &[3.0, 5.0, 4.0, 6.0], 10.0).unwrap();
        assert_eq!(fit.projected, 11);
        assert!((fit.r_squared - 0.64).abs() < 1e-12);
    }

    #[test]
    fn logarithmic_fit_on_near_log_data() {
        let xs = [10.0, 20.0, 30.0];
        let ys = [50.0, 53.5, 56.3];
        let fit = fit_and_project(CurveFamily::Logarithmic, &xs, &ys, 1000.0).unwrap();
        assert_eq!(fit.projected, 76);
        assert!((fit.slope - 5.660736912390732).abs() < 1e-9);
        assert!((fit.intercept - 36.851445248306334).abs() < 1e-9);
        assert!(fit.r_squared < 1.0);
        assert!((fit.r_squared - 0.9926245970025814).abs() < 1e-9);
    }

    #[test]
    fn logarithmic_fit_recovers_exact_log_curve() {
        let xs = [2.0, 4.0, 8.0, 16.0];
        let ys: Vec<f64> = xs.iter().map(|x: &f64| 3.0 * x.ln() + 1.0).collect();
        let fit = fit_and_project(CurveFamily::Logarithmic, &xs, &ys, 1024.0).unwrap();
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert_eq!(fit.projected, round_to(3.0 * 1024f64.ln() + 1.0, 5).ceil() as i64);
    }

    #[test]
    fn logarithmic_rejects_non_positive_samples_and_query() {
        let ys = [1.0, 2.0, 3.0];
        for xs in [[0.0, 20.0, 30.0], [10.0, -20.0, 30.0]] {
            let err = fit_and_project(CurveFamily::Logarithmic, &xs, &ys, 100.0).unwrap_err();
            assert!(err.is_domain(), "{err}");
        }
        let xs = [10.0, 20.0, 30.0];
        let err = fit_and_project(CurveFamily::Logarithmic, &xs, &ys, 0.0).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn domain_error_wins_over_degenerate_dependent_values() {
        let err =
            fit_and_project(CurveFamily::Logarithmic, &[0.0, 1.0], &[5.0, 5.0], 10.0).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn zero_variance_is_degenerate_not_nan() {
        for family in CurveFamily::ALL {
            let err =
                fit_and_project(family, &[10.0, 20.0, 30.0], &[0.1, 0.1, 0.1], 100.0).unwrap_err();
            assert!(err.is_degenerate(), "{family}: {err}");
            assert!(err.to_string().contains("R²"));
        }
    }

    #[test]
    fn values_one_ulp_apart_are_degenerate() {
        let xs = [10.0, 20.0, 30.0];
        let near_flat = [[0.1 + 0.2, 0.3, 0.3], [1.0, 1.0 + f64::EPSILON, 1.0]];
        for family in CurveFamily::ALL {
            for ys in near_flat {
                let err = fit_and_project(family, &xs, &ys, 1000.0).unwrap_err();
                assert!(err.is_degenerate(), "{family} {ys:?}: {err}");
            }
        }
    }

    #[test]
    fn small_spread_on_large_offset_keeps_its_r_squared() {
        // Same shape as [1, 0, 0], whose R² is 0.75.
        let xs = [10.0, 20.0, 30.0];
        let fit = fit_and_project(CurveFamily::Linear, &xs, &[1.0, 0.0, 0.0], 40.0).unwrap();
        assert!((fit.r_squared - 0.75).abs() < 1e-12, "r2={}", fit.r_squared);

        let ys = [1e6 + 1e-3, 1e6, 1e6];
        let fit = fit_and_project(CurveFamily::Linear, &xs, &ys, 40.0).unwrap();
        assert!((fit.r_squared - 0.75).abs() < 1e-6, "r2={}", fit.r_squared);
    }

    #[test]
    fn two_points_give_perfect_r_squared() {
        for family in CurveFamily::ALL {
            for ys in [[50.0, 55.0], [1.0, 1.0000001]] {
                let fit = fit_and_project(family, &[10.0, 20.0], &ys, 1000.0).unwrap();
                assert_eq!(fit.r_squared, 1.0, "{family} {ys:?}");
            }
        }
    }

    #[test]
    fn malformed_inputs_fail_fast() {
        let linear = CurveFamily::Linear;
        let err = fit_and_project(linear, &[1.0, 2.0, 3.0], &[1.0, 2.0], 5.0).unwrap_err();
        assert!(err.is_input());
        let err = fit_and_project(linear, &[1.0], &[1.0], 5.0).unwrap_err();
        assert!(err.is_input());
        let err = fit_and_project(linear, &[1.0, 2.0], &[1.0, f64::NAN], 5.0).unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn interpolation_is_allowed() {
        let xs = [10.0, 20.0, 30.0];
        let fit = fit_and_project(CurveFamily::Linear, &xs, &[100.0, 200.0, 300.0], 15.0).unwrap();
        assert_eq!(fit.projected, 150);
    }

    #[test]
    fn noisy_linear_data_has_high_but_imperfect_r_squared() {
        let mut rng = StdRng::seed_from_u64(7);
        let noise = Normal::new(0.0, 2.0).unwrap();
        let xs: Vec<f64> = (1..=12).map(|i| i as f64 * 10.0).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 4.0 * x + 25.0 + noise.sample(&mut rng)).collect();

        let fit = fit_and_project(CurveFamily::Linear, &xs, &ys, 1000.0).unwrap();
        assert!(fit.r_squared > 0.99 && fit.r_squared < 1.0, "r2={}", fit.r_squared);
        assert!((fit.slope - 4.0).abs() < 0.1, "slope={}", fit.slope);
        assert!((fit.projected - 4025).abs() < 100, "projected={}", fit.projected);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let (xs, ys) = ([10.0, 20.0, 30.0], [50.0, 53.5, 56.3]);
        let a = fit_and_project(CurveFamily::Logarithmic, &xs, &ys, 1000.0).unwrap();
        let b = fit_and_project(CurveFamily::Logarithmic, &xs, &ys, 1000.0).unwrap();
        assert_eq!(a.r_squared.to_bits(), b.r_squared.to_bits());
        assert_eq!(a, b);
    }
}
