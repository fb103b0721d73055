// rectangle of the window that holds the plot, plus the data ranges mapped onto it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl PlotArea {
    pub fn new(
        screen_width: f32,
        screen_height: f32,
        margin: f32,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Self {
        Self {
            left: margin,
            top: margin,
            width: (screen_width - 2.0 * margin).max(1.0),
            height: (screen_height - 2.0 * margin).max(1.0),
            x_range,
            y_range,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    // converts data x and y to graphical coordinates (screen y grows downwards)
    pub fn data_to_screen(&self, x: f64, y: f64) -> (f32, f32) {
        let tx = (x - self.x_range.0) / span(self.x_range);
        let ty = (y - self.y_range.0) / span(self.y_range);
        (
            self.left + (tx as f32) * self.width,
            self.bottom() - (ty as f32) * self.height,
        )
    }

    pub fn columns(&self) -> usize {
        self.width.ceil() as usize
    }

    // pixel column holding data x, None when x is off the plot
    pub fn column_of(&self, x: f64) -> Option<usize> {
        if x < self.x_range.0 || x > self.x_range.1 {
            return None;
        }
        let t = (x - self.x_range.0) / span(self.x_range);
        Some(((t * self.width as f64) as usize).min(self.columns() - 1))
    }
}

// zero-width ranges are drawn as if they were one unit wide
fn span(range: (f64, f64)) -> f64 {
    let s = range.1 - range.0;
    if s > 0.0 { s } else { 1.0 }
}

/*
 * Reduces a dense point sequence to the tallest y per pixel column, so a
 * step function with millions of points costs one line per column.
 */
pub fn column_peaks(points: &[(f64, f64)], area: &PlotArea) -> Vec<Option<f64>> {
    let mut peaks = vec![None; area.columns()];
    for &(x, y) in points {
        if let Some(col) = area.column_of(x) {
            let peak = &mut peaks[col];
            *peak = Some(peak.map_or(y, |p: f64| p.max(y)));
        }
    }
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea::new(600.0, 400.0, 50.0, (0.0, 10.0), (0.0, 1.0))
    }

    #[test]
    fn test_corners_map_to_plot_edges() {
        let a = area();
        assert_eq!(a.data_to_screen(0.0, 0.0), (50.0, 350.0));
        assert_eq!(a.data_to_screen(10.0, 1.0), (550.0, 50.0));
        assert_eq!((a.right(), a.bottom()), (550.0, 350.0));
    }

    #[test]
    fn test_column_of() {
        let a = area();
        assert_eq!(a.columns(), 500);
        assert_eq!(a.column_of(0.0), Some(0));
        assert_eq!(a.column_of(10.0), Some(499));
        assert_eq!(a.column_of(-0.1), None);
        assert_eq!(a.column_of(10.1), None);
    }

    #[test]
    fn test_column_peaks_keeps_maximum() {
        let a = area();
        let points = [(0.0, 0.1), (0.001, 0.4), (0.002, 0.2), (5.0, 0.3), (11.0, 0.9)];
        let peaks = column_peaks(&points, &a);
        assert_eq!(peaks.len(), 500);
        assert_eq!(peaks[0], Some(0.4));
        assert_eq!(peaks[250], Some(0.3));
        assert_eq!(peaks.iter().filter(|p| p.is_some()).count(), 2);
    }

    #[test]
    fn test_degenerate_range_does_not_divide_by_zero() {
        let a = PlotArea::new(600.0, 400.0, 50.0, (3.0, 3.0), (0.0, 1.0));
        let (sx, _) = a.data_to_screen(3.0, 0.0);
        assert!(sx.is_finite());
    }
}
