use macroquad::prelude::*;

use super::{FONT_SIZE, LINE_SPACING, SHADOW_OFFSET, TICKS};
use crate::geometry::PlotArea;

// evenly spaced tick values over a range, both ends included
pub fn tick_values(range: (f64, f64), count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![range.0];
    }
    let step = (range.1 - range.0) / (count - 1) as f64;
    (0..count).map(|i| range.0 + i as f64 * step).collect()
}

pub fn format_tick(value: f64, range: (f64, f64)) -> String {
    let span = (range.1 - range.0).abs();
    if span >= 10.0 {
        format!("{value:.1}")
    } else if span >= 0.1 {
        format!("{value:.2}")
    } else {
        format!("{value:.4}")
    }
}

pub fn draw_axes(area: &PlotArea) {
    let font_size = FONT_SIZE as f32;

    draw_line(area.left, area.bottom(), area.right(), area.bottom(), 1.0, BLACK);
    draw_line(area.left, area.top, area.left, area.bottom(), 1.0, BLACK);

    for x in tick_values(area.x_range, TICKS) {
        let (sx, sy) = area.data_to_screen(x, area.y_range.0);
        draw_line(sx, sy, sx, sy + 4.0, 1.0, BLACK);
        let label = format_tick(x, area.x_range);
        let dims = measure_text(&label, None, FONT_SIZE, 1.0);
        draw_text(&label, sx - dims.width / 2.0, sy + 4.0 + font_size, font_size, DARKGRAY);
    }

    for y in tick_values(area.y_range, TICKS) {
        let (sx, sy) = area.data_to_screen(area.x_range.0, y);
        draw_line(sx - 4.0, sy, sx, sy, 1.0, BLACK);
        let label = format_tick(y, area.y_range);
        let dims = measure_text(&label, None, FONT_SIZE, 1.0);
        draw_text(&label, sx - 6.0 - dims.width, sy + dims.height / 2.0, font_size, DARKGRAY);
    }
}

// caption lines with a light drop shadow
pub fn draw_caption(area: &PlotArea, lines: &[String]) {
    let font_size = FONT_SIZE as f32;
    let x = area.left + 10.0;
    for (i, line) in lines.iter().enumerate() {
        let y = area.top + LINE_SPACING * (i + 1) as f32;
        draw_text(line, x + SHADOW_OFFSET, y + SHADOW_OFFSET, font_size, LIGHTGRAY);
        draw_text(line, x, y, font_size, BLACK);
    }
}
