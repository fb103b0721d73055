use macroquad::Window;
use macroquad::prelude::*;
use tracing::debug;

use super::{PLOT_MARGIN, PlotData, PlotRenderer, hud};
use crate::config::WindowSettings;
use crate::error::Result;
use crate::geometry::{PlotArea, column_peaks};

/// Opens a window and draws the plot until it is closed or Escape is pressed.
///
/// macroquad allows a single window per process, so render at most once.
#[derive(Debug, Clone, Default)]
pub struct WindowRenderer {
    settings: WindowSettings,
}

impl WindowRenderer {
    pub fn new(settings: WindowSettings) -> Self {
        Self { settings }
    }

    fn conf(&self) -> Conf {
        Conf {
            window_title: self.settings.title.clone(),
            window_width: self.settings.width,
            window_height: self.settings.height,
            window_resizable: true,
            ..Default::default()
        }
    }
}

impl PlotRenderer for WindowRenderer {
    fn render(&mut self, plot: &PlotData) -> Result<()> {
        debug!(
            points = plot.points.len(),
            width = self.settings.width,
            height = self.settings.height,
            "opening plot window"
        );
        // blocks until the draw loop returns and the window closes
        Window::from_config(self.conf(), draw_loop(plot.clone()));
        Ok(())
    }
}

async fn draw_loop(plot: PlotData) {
    loop {
        clear_background(WHITE);

        // recomputed every frame so the plot follows window resizes
        let area = PlotArea::new(
            screen_width(),
            screen_height(),
            PLOT_MARGIN,
            plot.x_range,
            plot.y_range,
        );

        hud::draw_axes(&area);
        draw_curve(&area, &plot.points);
        hud::draw_caption(&area, &plot.caption);

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        next_frame().await
    }
}

// one segment per pixel column, joined vertically at bin edges
fn draw_curve(area: &PlotArea, points: &[(f64, f64)]) {
    let y_max = area.y_range.1;
    let mut previous: Option<(f32, f32)> = None;
    for (col, peak) in column_peaks(points, area).into_iter().enumerate() {
        let Some(y) = peak else {
            previous = None;
            continue;
        };
        let (_, sy) = area.data_to_screen(area.x_range.0, y.min(y_max));
        let x0 = area.left + col as f32;
        let x1 = x0 + 1.0;
        if let Some((px, py)) = previous {
            draw_line(px, py, x0, sy, 1.0, BLUE);
        }
        draw_line(x0, sy, x1, sy, 1.0, BLUE);
        previous = Some((x1, sy));
    }
}
