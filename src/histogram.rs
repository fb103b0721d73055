//! Fixed-width density histogram.
//!
//! Bins start at the sample minimum and are `h` wide. Each height is the bin
//! count divided by `N * h`, so the step function integrates to one. The
//! last bin is closed on the right and always holds the sample maximum.

use tracing::debug;

use crate::error::{Error, Result};

// fraction of the first bin width used as the plotting step
const RENDER_STEP_FRACTION: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    borders: Vec<f64>,
    heights: Vec<f64>,
    bin_width: f64,
    sample_len: usize,
}

impl Histogram {
    /// Builds the histogram from a sample without modifying it.
    ///
    /// # Errors
    /// - [`Error::InsufficientData`] for fewer than two values
    /// - [`Error::InvalidBinWidth`] for a non-positive or non-finite width, or
    ///   one too small to separate borders at the sample's magnitude
    /// - [`Error::NonFiniteValue`] if the sample holds NaN or infinity
    /// - [`Error::TooManyBins`] if the bins cannot be allocated
    pub fn build(sample: &[f64], bin_width: f64) -> Result<Self> {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                required: 2,
                actual: sample.len(),
            });
        }
        if !(bin_width > 0.0 && bin_width.is_finite()) {
            return Err(Error::InvalidBinWidth(bin_width));
        }
        if let Some((index, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::NonFiniteValue { index, value });
        }

        let mut sorted = sample.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        let span_bins = ((max - min) / bin_width).ceil();
        if !(span_bins < usize::MAX as f64) {
            return Err(Error::TooManyBins { bins: span_bins });
        }
        // an all-equal sample still gets one bin
        let mut bin_count = (span_bins as usize).max(1);
        // the division can round down so that the last border falls short of max
        if min + bin_count as f64 * bin_width < max {
            bin_count += 1;
        }

        let mut borders = Vec::new();
        let mut heights = Vec::new();
        if borders.try_reserve_exact(bin_count + 1).is_err()
            || heights.try_reserve_exact(bin_count).is_err()
        {
            return Err(Error::TooManyBins {
                bins: bin_count as f64,
            });
        }
        borders.extend((0..=bin_count).map(|i| min + i as f64 * bin_width));
        // a width below the float resolution collapses neighbouring borders
        if !borders.windows(2).all(|w| w[0] < w[1]) {
            return Err(Error::InvalidBinWidth(bin_width));
        }

        // single sweep: index only moves forward over the sorted values
        let n = sorted.len();
        let scale = n as f64 * bin_width;
        let mut index = 0;
        for (bin, &upper) in borders[1..].iter().enumerate() {
            let start = index;
            if bin + 1 == bin_count {
                index = n;
            } else {
                while index < n && sorted[index] < upper {
                    index += 1;
                }
            }
            heights.push((index - start) as f64 / scale);
        }

        debug!(bins = bin_count, min, max, bin_width, "histogram built");

        Ok(Self {
            borders,
            heights,
            bin_width,
            sample_len: n,
        })
    }

    pub fn borders(&self) -> &[f64] {
        &self.borders
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn bin_count(&self) -> usize {
        self.heights.len()
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Number of values the histogram was built from.
    pub fn len(&self) -> usize {
        self.sample_len
    }

    pub fn is_empty(&self) -> bool {
        self.sample_len == 0
    }

    /// `(first border, last border)`.
    pub fn x_range(&self) -> (f64, f64) {
        (self.borders[0], self.borders[self.borders.len() - 1])
    }

    /// Total area under the step function; one up to rounding.
    pub fn area(&self) -> f64 {
        self.heights.iter().sum::<f64>() * self.bin_width
    }

    /// Density at `x`.
    ///
    /// A point on an inner border belongs to the bin below it. Points outside
    /// `[first border, last border]` (and NaN) have density zero.
    pub fn density_at(&self, x: f64) -> f64 {
        let (first, last) = self.x_range();
        if x.is_nan() || x < first || x > last {
            return 0.0;
        }
        // smallest i >= 1 with x <= borders[i]
        let i = self.borders.partition_point(|&b| b < x).max(1);
        self.heights[i - 1]
    }

    /*
     * Dense step-function samples for plotting. x advances by 1% of the
     * first bin's width and is carried over from one bin to the next, so
     * each point lies in (borders[i], borders[i + 1]] of the bin whose
     * height it carries (the very first point sits on borders[0]).
     */
    pub fn render_points(&self) -> Vec<(f64, f64)> {
        let step = (self.borders[1] - self.borders[0]) * RENDER_STEP_FRACTION;
        let mut points = Vec::with_capacity(self.bin_count() * 101);
        let mut x = self.borders[0];
        'bins: for (&upper, &height) in self.borders[1..].iter().zip(&self.heights) {
            while x <= upper {
                points.push((x, height));
                let next = x + step;
                // step below the float resolution at x
                if next <= x {
                    break 'bins;
                }
                x = next;
            }
        }
        points
    }
}
