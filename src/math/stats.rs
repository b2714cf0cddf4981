//! Summary statistics and rounding helpers.

/// Arithmetic mean. Returns `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divisor `n`). Returns `0.0` for an empty slice.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Round to `places` decimal places (half away from zero).
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_uses_population_divisor() {
        // mean 2.5, squared deviations sum to 5 -> 5 / 4
        assert!((population_variance(&[1.0, 2.0, 3.0, 4.0]) - 1.25).abs() < 1e-15);
        assert_eq!(population_variance(&[7.0, 7.0, 7.0]), 0.0);
        assert_eq!(population_variance(&[]), 0.0);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0, 9.0]), 5.0);
    }

    #[test]
    fn round_to_absorbs_float_noise() {
        assert_eq!(round_to(10000.000000000002, 5), 10000.0);
        assert_eq!(round_to(9999.999999999998, 5), 10000.0);
        assert_eq!(round_to(1.234567, 5), 1.23457);
    }
}
