// File: crates/curve-chart/src/view.rs
// First-class view state: visible ranges and helpers for pan/zoom/autoscale.

use crate::geometry::RectI32;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Extents of every finite point in `chart`, padded by `margin` (a
    /// fraction of each span) on both sides.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for (x, y) in s.finite_points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }

    /// Shift by a pointer drag of (dx, dy) pixels; screen y grows downwards.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, plot: &RectI32) {
        let plot_w = (plot.width() as f64).max(1.0);
        let plot_h = (plot.height() as f64).max(1.0);
        let wx = -dx / plot_w * (self.x_max - self.x_min);
        let wy = dy / plot_h * (self.y_max - self.y_min);
        self.x_min += wx; self.x_max += wx;
        self.y_min += wy; self.y_max += wy;
    }

    /// Zoom keeping the world point under the cursor fixed. Positive
    /// `scroll` zooms in.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, plot: &RectI32) {
        let (l, r) = (plot.left as f64, plot.right as f64);
        let (t, b) = (plot.top as f64, plot.bottom as f64);
        let plot_w = (r - l).max(1.0);
        let plot_h = (b - t).max(1.0);
        let cx = cursor_x.clamp(l, r);
        let cy = cursor_y.clamp(t, b);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let wx = self.x_min + (cx - l) / plot_w * x_span;
        let wy = self.y_max - (cy - t) / plot_h * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = x_span * factor;
        let ny = y_span * factor;
        let rx = (wx - self.x_min) / x_span;
        let ry = (self.y_max - wy) / y_span;
        self.x_min = wx - rx * nx; self.x_max = self.x_min + nx;
        self.y_max = wy + ry * ny; self.y_min = self.y_max - ny;
    }
}
