// File: crates/curve-chart/src/series.rs
// Summary: Line series model over (x, y) pairs.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: Option<String>,
    pub data: Vec<(f64, f64)>,
    /// Stroke override; `None` uses the theme's line color.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self { label: None, data, color: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Points with both coordinates finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}
