// File: crates/curve-plot/src/plot.rs
// Summary: Glue from an evaluated curve to a chart and its render options.

use curve_chart::{theme, Chart, RenderOptions, Series};
use curve_core::Curve;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 640;
pub const AUTOSCALE_MARGIN: f64 = 0.05;
pub const X_LABEL: &str = "Reserve deviation (%)";
pub const Y_LABEL: &str = "Interest rate";

pub fn build_chart(curve: Curve) -> Chart {
    let mut chart = Chart::new();
    chart.add_series(Series::line(curve.into_points()).with_label("interest"));
    chart.autoscale_axes(AUTOSCALE_MARGIN);
    chart.x_axis.label = X_LABEL.to_string();
    chart.y_axis.label = Y_LABEL.to_string();
    chart
}

pub fn render_options(theme_name: &str, width: u32, height: u32) -> RenderOptions {
    RenderOptions {
        width: clamp_dim(width),
        height: clamp_dim(height),
        theme: theme::find(theme_name),
        ..RenderOptions::default()
    }
}

fn clamp_dim(px: u32) -> i32 {
    px.clamp(64, 8192) as i32
}
