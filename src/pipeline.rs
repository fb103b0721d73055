//! Generate → three-sigma check → histogram → plot.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, info};

use crate::app::{PlotData, PlotRenderer};
use crate::config::{Config, SampleSource};
use crate::error::{Error, Result};
use crate::histogram::Histogram;
use crate::normal::NormalSampler;
use crate::summary::SampleSummary;
use crate::three_sigma::{self, ThreeSigmaReport};

/// Vertical range of the plot; densities of interest stay well below one.
pub const Y_RANGE: (f64, f64) = (0.0, 1.0);

#[derive(Debug, Clone)]
pub struct Outcome {
    pub three_sigma: ThreeSigmaReport,
    pub summary: SampleSummary,
    pub histogram: Histogram,
}

/// Draws `config.sample_size` values from the configured source.
pub fn generate_sample(config: &Config) -> Result<Vec<f64>> {
    debug!(
        n = config.sample_size,
        mean = config.mean,
        std_dev = config.std_dev,
        seed = config.seed,
        source = ?config.source,
        "generating sample"
    );
    match config.source {
        SampleSource::Lcg => NormalSampler::with_seed(config.seed).sample_n(
            config.mean,
            config.std_dev,
            config.sample_size,
        ),
        SampleSource::Reference => {
            if !(config.std_dev > 0.0) {
                return Err(Error::InvalidParameter {
                    name: "standard deviation",
                    value: config.std_dev,
                });
            }
            let normal = Normal::new(config.mean, config.std_dev).map_err(|_| {
                Error::InvalidParameter {
                    name: "standard deviation",
                    value: config.std_dev,
                }
            })?;
            // the i32 seed is reinterpreted bit for bit
            let mut rng = StdRng::seed_from_u64(u64::from(config.seed as u32));
            Ok((0..config.sample_size)
                .map(|_| normal.sample(&mut rng))
                .collect())
        }
    }
}

/// Runs every numeric stage; nothing is printed or drawn.
pub fn analyze(config: &Config) -> Result<Outcome> {
    config.validate()?;
    let sample = generate_sample(config)?;
    let three_sigma = three_sigma::check(&sample, config.mean, config.std_dev)?;
    let summary = SampleSummary::from_sample(&sample)?;
    let histogram = Histogram::build(&sample, config.bin_width)?;
    info!(
        bins = histogram.bin_count(),
        met = three_sigma.is_met(),
        "analysis finished"
    );
    Ok(Outcome {
        three_sigma,
        summary,
        histogram,
    })
}

impl Outcome {
    /// Console report, one entry per line.
    pub fn report(&self, config: &Config) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Generated a sample of {} values of the normal distribution with mean = {} and standard deviation = {}",
                self.summary.len, config.mean, config.std_dev
            ),
            format!(
                "Sample mean = {:.6}, sample standard deviation = {:.6}, range = [{:.6}, {:.6}]",
                self.summary.mean, self.summary.std_dev, self.summary.min, self.summary.max
            ),
            format!(
                "Probability of getting a random number inside ({} - 3 * {}, {} + 3 * {}): {}",
                config.mean, config.std_dev, config.mean, config.std_dev, self.three_sigma.fraction
            ),
        ];
        lines.push(if self.three_sigma.is_met() {
            "3-sigma rule is met.".to_string()
        } else {
            "3-sigma rule is not met.".to_string()
        });
        lines.push(format!(
            "Histogram: {} bins of width {}",
            self.histogram.bin_count(),
            self.histogram.bin_width()
        ));
        lines
    }

    pub fn plot_data(&self) -> PlotData {
        PlotData {
            points: self.histogram.render_points(),
            x_range: self.histogram.x_range(),
            y_range: Y_RANGE,
            caption: vec![
                format!("N = {}", self.summary.len),
                format!("within 3 sigma: {:.6}", self.three_sigma.fraction),
            ],
        }
    }
}

/// Full run: analysis, report lines through `report`, then the plot if enabled.
pub fn run<R, F>(config: &Config, renderer: &mut R, mut report: F) -> Result<Outcome>
where
    R: PlotRenderer + ?Sized,
    F: FnMut(&str),
{
    let outcome = analyze(config)?;
    for line in outcome.report(config) {
        report(&line);
    }
    if config.plot {
        report("Now the application will open a window with the histogram of the generated sample.");
        renderer.render(&outcome.plot_data())?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::RecordingRenderer;

    fn small_config() -> Config {
        Config {
            sample_size: 20_000,
            bin_width: 0.05,
            ..Config::default()
        }
    }

    #[test]
    fn test_generate_sample_is_reproducible() {
        let cfg = small_config();
        assert_eq!(generate_sample(&cfg).unwrap(), generate_sample(&cfg).unwrap());
    }

    #[test]
    fn test_generate_sample_matches_sampler() {
        let cfg = Config {
            sample_size: 10,
            ..small_config()
        };
        let mut sampler = NormalSampler::with_seed(0);
        let expected = sampler.sample_n(5.0, 2.0, 10).unwrap();
        assert_eq!(generate_sample(&cfg).unwrap(), expected);
    }

    #[test]
    fn test_reference_source() {
        let cfg = Config {
            source: SampleSource::Reference,
            ..small_config()
        };
        let sample = generate_sample(&cfg).unwrap();
        assert_eq!(sample.len(), 20_000);
        assert_eq!(sample, generate_sample(&cfg).unwrap());
        let mean = sample.iter().sum::<f64>() / sample.len() as f64;
        assert!((mean - 5.0).abs() < 0.1, "mean = {mean}");
    }

    #[test]
    fn test_reference_rejects_bad_std_dev() {
        let cfg = Config {
            source: SampleSource::Reference,
            std_dev: 0.0,
            ..small_config()
        };
        assert!(matches!(
            generate_sample(&cfg),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_analyze_rejects_invalid_config() {
        let cfg = Config {
            bin_width: -1.0,
            ..small_config()
        };
        assert!(matches!(analyze(&cfg), Err(Error::InvalidBinWidth(_))));
    }

    #[test]
    fn test_analyze() {
        let outcome = analyze(&small_config()).unwrap();
        assert_eq!(outcome.summary.len, 20_000);
        assert_eq!(outcome.histogram.len(), 20_000);
        assert!((outcome.histogram.area() - 1.0).abs() < 1e-9);
        assert!(outcome.three_sigma.is_met());
    }

    #[test]
    fn test_run_renders_once_with_histogram_ranges() {
        let cfg = small_config();
        let mut renderer = RecordingRenderer::default();
        let mut lines = Vec::new();
        let outcome = run(&cfg, &mut renderer, |l| lines.push(l.to_string())).unwrap();

        assert_eq!(renderer.plots.len(), 1);
        let plot = &renderer.plots[0];
        assert_eq!(plot.x_range, outcome.histogram.x_range());
        assert_eq!(plot.y_range, (0.0, 1.0));
        assert!(!plot.points.is_empty());

        assert!(lines[0].starts_with("Generated a sample of 20000 values"));
        assert!(lines.iter().any(|l| l == "3-sigma rule is met."));
        assert!(lines.last().unwrap().contains("window"));
    }

    #[test]
    fn test_run_without_plot() {
        let cfg = Config {
            plot: false,
            ..small_config()
        };
        let mut renderer = RecordingRenderer::default();
        let mut count = 0;
        run(&cfg, &mut renderer, |_| count += 1).unwrap();
        assert!(renderer.plots.is_empty());
        assert_eq!(count, 5);
    }

    #[test]
    fn test_report_not_met() {
        let mut outcome = analyze(&small_config()).unwrap();
        outcome.three_sigma.fraction = 0.9;
        let lines = outcome.report(&small_config());
        assert!(lines.iter().any(|l| l == "3-sigma rule is not met."));
        assert!(lines[2].contains("(5 - 3 * 2, 5 + 3 * 2): 0.9"));
    }
}
