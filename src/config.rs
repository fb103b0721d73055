use clap::ValueEnum;

use crate::error::{Error, Result};

/// Where the normal sample comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SampleSource {
    /// 32-bit LCG with the rational inverse-CDF transform (default)
    #[default]
    Lcg,
    /// rand_distr's normal distribution over a seeded StdRng, for comparison
    Reference,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Normal distribution histogram".to_string(),
            width: 600,
            height: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mean: f64,
    pub std_dev: f64,
    pub bin_width: f64,
    pub sample_size: usize,
    pub seed: i32,
    pub source: SampleSource,
    pub plot: bool,
    pub window: WindowSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mean: 5.0,
            std_dev: 2.0,
            bin_width: 0.001,
            sample_size: 1_000_000,
            seed: 0,
            source: SampleSource::Lcg,
            plot: true,
            window: WindowSettings::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.mean.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "mean must be finite, got {}",
                self.mean
            )));
        }
        if !(self.std_dev > 0.0 && self.std_dev.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "standard deviation",
                value: self.std_dev,
            });
        }
        if !(self.bin_width > 0.0 && self.bin_width.is_finite()) {
            return Err(Error::InvalidBinWidth(self.bin_width));
        }
        if self.sample_size < 2 {
            return Err(Error::InsufficientData {
                required: 2,
                actual: self.sample_size,
            });
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}
