// Descriptive statistics for report columns

/// Arithmetic mean. Callers guarantee a non-empty vector.
pub fn mean(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "empty sample vector");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by n, not n-1), matching the
/// convention of the experiment reports.
pub fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[0.5, 0.6]), 0.55);
    }

    #[test]
    fn test_mean_singleton() {
        assert_eq!(mean(&[3.5]), 3.5);
    }

    #[test]
    fn test_population_std_divides_by_n() {
        // mean=5, squared deviations 9+1+1+9=20, /4 = 5
        let std = population_std(&[2.0, 4.0, 6.0, 8.0]);
        assert!((std - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_population_std_constant_is_zero() {
        assert_eq!(population_std(&[4.2, 4.2, 4.2]), 0.0);
    }
}
