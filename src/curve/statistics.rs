use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Summary of a score sample. Every field is 0 for an empty sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub standard_deviation: f64,
    pub minimum: f64,
    pub maximum: f64,
}

/// Population (not Bessel-corrected) statistics over `values`
pub fn compute_statistics(values: &[f64]) -> Statistics {
    if values.is_empty() {
        return Statistics::default();
    }

    let sample = Array1::from_vec(values.to_vec());
    let mean = sample.mean().unwrap_or(0.0);

    Statistics {
        count: sample.len(),
        mean,
        standard_deviation: calculate_std_dev(&sample, mean),
        minimum: sample.fold(f64::INFINITY, |a, &b| a.min(b)),
        maximum: sample.fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
    }
}

fn calculate_std_dev(sample: &Array1<f64>, mean: f64) -> f64 {
    calculate_variance(sample, mean).sqrt()
}

fn calculate_variance(sample: &Array1<f64>, mean: f64) -> f64 {
    let sum_sq_diff: f64 = sample.iter().map(|&v| (v - mean).powi(2)).sum();
    sum_sq_diff / sample.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_is_all_zero() {
        let stats = compute_statistics(&[]);

        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.standard_deviation, 0.0);
        assert_eq!(stats.minimum, 0.0);
        assert_eq!(stats.maximum, 0.0);
    }

    #[test]
    fn test_one_to_five() {
        let stats = compute_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(stats.count, 5);
        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert!((stats.standard_deviation - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.minimum, 1.0);
        assert_eq!(stats.maximum, 5.0);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = compute_statistics(&[2.5, 1.0, 3.75, 4.0]);
        let reversed = compute_statistics(&[4.0, 3.75, 1.0, 2.5]);

        assert!((forward.mean - reversed.mean).abs() < 1e-12);
        assert!((forward.standard_deviation - reversed.standard_deviation).abs() < 1e-12);
        assert_eq!(forward.minimum, reversed.minimum);
        assert_eq!(forward.maximum, reversed.maximum);
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let stats = compute_statistics(&[2.2]);

        assert_eq!(stats.mean, 2.2);
        assert_eq!(stats.standard_deviation, 0.0);
        assert_eq!(stats.minimum, 2.2);
        assert_eq!(stats.maximum, 2.2);
    }
}
