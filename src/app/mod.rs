use crate::error::Result;

pub mod hud;
pub mod renderer;

pub use renderer::WindowRenderer;

const SHADOW_OFFSET: f32 = 1.0;
const FONT_SIZE: u16 = 16;
const LINE_SPACING: f32 = 18.0;
const PLOT_MARGIN: f32 = 40.0;
const TICKS: usize = 5;

/// Everything a renderer needs to draw the histogram curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub points: Vec<(f64, f64)>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// lines drawn in the top-left corner
    pub caption: Vec<String>,
}

/// Displays a plot. Implementations may block until the user closes it.
pub trait PlotRenderer {
    fn render(&mut self, plot: &PlotData) -> Result<()>;
}

/// Keeps every plot it is handed; used where no display is available.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub plots: Vec<PlotData>,
}

impl PlotRenderer for RecordingRenderer {
    fn render(&mut self, plot: &PlotData) -> Result<()> {
        self.plots.push(plot.clone());
        Ok(())
    }
}
