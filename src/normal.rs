use tracing::warn;

use crate::error::{Error, Result};
use crate::rng::Lcg32;

// rational approximation coefficients (Hastings form)
const C0: f64 = 2.515517;
const C1: f64 = 0.802853;
const C2: f64 = 0.010328;
const D1: f64 = 1.432788;
const D2: f64 = 0.1869269;
const D3: f64 = 0.001308;

/*
 * Rational approximation of the inverse normal CDF, applied to
 * teta = sqrt(-2 ln u) for the raw uniform u.
 * https://en.wikipedia.org/wiki/Normal_distribution#Generating_values_from_normal_distribution
 *
 * u = 0 gives teta = inf and a NaN result; that boundary is left as is.
 */
pub fn rational_deviate(u: f64) -> f64 {
    let teta = (-2.0 * u.ln()).sqrt();
    let numerator = C0 + C1 * teta + C2 * teta.powf(2.0);
    let denominator = 1.0 + D1 * teta + D2 * teta.powf(2.0) + D3 * teta.powf(3.0);
    numerator / denominator - teta
}

fn check_std_dev(std_dev: f64) -> Result<()> {
    // also rejects NaN
    if std_dev > 0.0 {
        Ok(())
    } else {
        warn!(std_dev, "non-positive standard deviation");
        Err(Error::InvalidParameter {
            name: "standard deviation",
            value: std_dev,
        })
    }
}

/// Normal deviates drawn from an owned [`Lcg32`], one uniform per value.
#[derive(Debug, Clone, Default)]
pub struct NormalSampler {
    uniform: Lcg32,
}

impl NormalSampler {
    pub fn new(uniform: Lcg32) -> Self {
        Self { uniform }
    }

    pub fn with_seed(seed: i32) -> Self {
        Self::new(Lcg32::new(seed))
    }

    pub fn uniform(&self) -> &Lcg32 {
        &self.uniform
    }

    /// Draws one value with the given mean and standard deviation.
    ///
    /// A rejected `std_dev` does not advance the generator.
    pub fn sample(&mut self, mean: f64, std_dev: f64) -> Result<f64> {
        check_std_dev(std_dev)?;
        Ok(self.draw(mean, std_dev))
    }

    /// Draws `n` values in generator order, validating the parameters once.
    pub fn sample_n(&mut self, mean: f64, std_dev: f64, n: usize) -> Result<Vec<f64>> {
        check_std_dev(std_dev)?;
        Ok((0..n).map(|_| self.draw(mean, std_dev)).collect())
    }

    fn draw(&mut self, mean: f64, std_dev: f64) -> f64 {
        rational_deviate(self.uniform.next_uniform()) * std_dev + mean
    }
}
