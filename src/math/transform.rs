//! Independent-variable transforms for each curve family.
//!
//! - `Linear`: identity
//! - `Logarithmic`: natural log, defined only for `x > 0`
//!
//! The transform is applied to every sample and to the query point, so the fit
//! itself is always a straight line in the transformed coordinate.

use crate::domain::CurveFamily;
use crate::error::AppError;

/// Map one independent value into fit coordinates.
pub fn transform(family: CurveFamily, x: f64) -> Result<f64, AppError> {
    match family {
        CurveFamily::Linear => Ok(x),
        CurveFamily::Logarithmic => {
            if !(x > 0.0) {
                return Err(AppError::domain(format!(
                    "logarithmic fit requires strictly positive independent values, got {x}"
                )));
            }
            Ok(x.ln())
        }
    }
}

/// Map all independent values into fit coordinates, failing on the first bad one.
pub fn transform_all(family: CurveFamily, xs: &[f64]) -> Result<Vec<f64>, AppError> {
    xs.iter().map(|&x| transform(family, x)).collect()
}
