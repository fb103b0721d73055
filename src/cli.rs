//! CLI argument parsing

use clap::Parser;

use crate::config::{Config, SampleSource, WindowSettings};

#[derive(Parser, Debug)]
#[command(name = "sigma-histogram")]
#[command(version)]
#[command(about = "Normal sample generator with a three-sigma check and density histogram", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Mean of the generated distribution
    #[arg(long, default_value = "5.0")]
    pub mean: f64,

    /// Standard deviation of the generated distribution
    #[arg(short = 's', long = "std-dev", value_name = "SIGMA", default_value = "2.0")]
    pub std_dev: f64,

    /// Histogram bin width
    #[arg(short = 'w', long = "bin-width", value_name = "H", default_value = "0.001")]
    pub bin_width: f64,

    /// Number of values to generate
    #[arg(short = 'n', long = "samples", value_name = "N", default_value = "1000000")]
    pub samples: usize,

    /// Initial generator register
    #[arg(long, default_value = "0")]
    pub seed: i32,

    /// Sample source
    #[arg(long, value_enum, default_value = "lcg")]
    pub source: SampleSource,

    /// Skip the plot window and only print the report
    #[arg(long = "no-plot")]
    pub no_plot: bool,

    /// Plot window width in pixels
    #[arg(long, default_value = "600")]
    pub width: i32,

    /// Plot window height in pixels
    #[arg(long, default_value = "400")]
    pub height: i32,

    /// Enable debug tracing output (to stderr)
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    pub fn to_config(&self) -> Config {
        Config {
            mean: self.mean,
            std_dev: self.std_dev,
            bin_width: self.bin_width,
            sample_size: self.samples,
            seed: self.seed,
            source: self.source,
            plot: !self.no_plot,
            window: WindowSettings {
                width: self.width,
                height: self.height,
                ..WindowSettings::default()
            },
        }
    }
}
