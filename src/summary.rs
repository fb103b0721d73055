use nalgebra::DVector;

use crate::error::{Error, Result};

/// Empirical moments and extremes of a generated sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub len: usize,
    pub mean: f64,
    /// population standard deviation (divides by n)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SampleSummary {
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }
        let values = DVector::from_column_slice(sample);
        Ok(Self {
            len: values.len(),
            mean: values.mean(),
            std_dev: values.variance().sqrt(),
            min: values.min(),
            max: values.max(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let s = SampleSummary::from_sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(s.len, 8);
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.std_dev - 2.0).abs() < 1e-12);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
    }

    #[test]
    fn test_negative_values() {
        let s = SampleSummary::from_sample(&[-3.0, -1.0]).unwrap();
        assert_eq!(s.min, -3.0);
        assert_eq!(s.max, -1.0);
        assert!((s.mean + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        assert_eq!(SampleSummary::from_sample(&[]), Err(Error::EmptySample));
    }
}
