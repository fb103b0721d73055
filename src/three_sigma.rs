//! Empirical check of the three-sigma rule.

use tracing::info;

use crate::error::{Error, Result};

/// Share of a normal sample expected within three standard deviations.
pub const RULE_THRESHOLD: f64 = 0.997;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeSigmaReport {
    pub low: f64,
    pub high: f64,
    pub inside: usize,
    pub total: usize,
    pub fraction: f64,
}

impl ThreeSigmaReport {
    pub fn is_met(&self) -> bool {
        self.fraction >= RULE_THRESHOLD
    }
}

/// Number of values strictly inside `(low, high)`.
pub fn count_within(sample: &[f64], low: f64, high: f64) -> usize {
    sample.iter().filter(|&&x| low < x && x < high).count()
}

/// Counts values strictly inside `(mean - 3 sd, mean + 3 sd)`.
pub fn check(sample: &[f64], mean: f64, std_dev: f64) -> Result<ThreeSigmaReport> {
    if !(std_dev > 0.0) {
        return Err(Error::InvalidParameter {
            name: "standard deviation",
            value: std_dev,
        });
    }
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    let low = mean - 3.0 * std_dev;
    let high = mean + 3.0 * std_dev;
    let inside = count_within(sample, low, high);
    let fraction = inside as f64 / sample.len() as f64;
    info!(inside, total = sample.len(), fraction, "three-sigma check");
    Ok(ThreeSigmaReport {
        low,
        high,
        inside,
        total: sample.len(),
        fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normal::NormalSampler;

    #[test]
    fn test_bounds_are_exclusive() {
        // mean 0, sd 1: interval (-3, 3)
        let data = [-3.0, -2.9, 0.0, 2.9, 3.0];
        let report = check(&data, 0.0, 1.0).unwrap();
        assert_eq!(report.inside, 3);
        assert_eq!(report.total, 5);
        assert!((report.fraction - 0.6).abs() < 1e-15);
        assert!(!report.is_met());
    }

    #[test]
    fn test_all_inside_is_met() {
        let report = check(&[4.0, 5.0, 6.0], 5.0, 2.0).unwrap();
        assert_eq!(report.fraction, 1.0);
        assert!(report.is_met());
        assert_eq!((report.low, report.high), (-1.0, 11.0));
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(check(&[], 0.0, 1.0), Err(Error::EmptySample));
    }

    #[test]
    fn test_invalid_std_dev() {
        assert!(matches!(
            check(&[1.0], 0.0, 0.0),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(check(&[1.0], 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_nan_values_count_as_outside() {
        assert_eq!(count_within(&[f64::NAN, 0.0], -1.0, 1.0), 1);
        let report = check(&[f64::NAN, 5.0], 5.0, 1.0).unwrap();
        assert_eq!(report.fraction, 0.5);
    }

    #[test]
    fn test_threshold_boundary() {
        let report = ThreeSigmaReport {
            low: 0.0,
            high: 0.0,
            inside: 997,
            total: 1000,
            fraction: 0.997,
        };
        assert!(report.is_met());
    }

    #[test]
    fn test_generated_sample_near_rule() {
        let mut sampler = NormalSampler::with_seed(0);
        let sample = sampler.sample_n(5.0, 2.0, 1_000_000).unwrap();
        let report = check(&sample, 5.0, 2.0).unwrap();
        assert!(
            (report.fraction - 0.9973).abs() < 0.01,
            "fraction = {}",
            report.fraction
        );
        assert!(report.is_met());
    }
}
