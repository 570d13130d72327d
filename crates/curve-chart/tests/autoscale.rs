// File: crates/curve-chart/tests/autoscale.rs
// Purpose: Validate autoscale and view-state pan/zoom math.

use curve_chart::{Chart, RenderOptions, Series, ViewState};

#[test]
fn autoscale_pads_both_axes() {
    let mut chart = Chart::new();
    chart.add_series(Series::line(vec![(-100.0, -10.0), (0.0, 2.0), (100.0, 14.0)]));
    chart.autoscale_axes(0.05);

    assert!((chart.x_axis.min - -110.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 110.0).abs() < 1e-9);
    assert!((chart.y_axis.min - -11.2).abs() < 1e-9);
    assert!((chart.y_axis.max - 15.2).abs() < 1e-9);
}

#[test]
fn empty_chart_falls_back_to_unit_range() {
    let v = ViewState::from_chart(&Chart::new(), 0.05);
    assert_eq!(v, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
}

#[test]
fn flat_series_gets_nonzero_span() {
    let mut chart = Chart::new();
    chart.add_series(Series::line(vec![(0.0, 2.0), (1.0, 2.0)]));
    let v = ViewState::from_chart(&chart, 0.0);
    assert!(v.y_max - v.y_min > 0.5);
    assert!(v.y_min < 2.0 && v.y_max > 2.0);
}

#[test]
fn pan_moves_against_drag() {
    let plot = RenderOptions::default().plot_rect();
    let mut v = ViewState { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 };
    v.pan_by_pixels(plot.width() as f64 / 10.0, 0.0, &plot);
    assert!((v.x_min - -1.0).abs() < 1e-9);
    assert!((v.x_max - 9.0).abs() < 1e-9);
    assert_eq!((v.y_min, v.y_max), (0.0, 10.0));
}

#[test]
fn zoom_keeps_cursor_point_fixed() {
    let plot = RenderOptions::default().plot_rect();
    let mut v = ViewState { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 };
    let (cx, cy) = (plot.left as f64 + plot.width() as f64 * 0.25, plot.top as f64 + plot.height() as f64 * 0.5);
    v.zoom_at_pixel(0.5, cx, cy, &plot);
    assert!((v.x_max - v.x_min - 5.0).abs() < 1e-9);
    // world x under the cursor was 2.5 before and stays 2.5
    let wx = v.x_min + 0.25 * (v.x_max - v.x_min);
    assert!((wx - 2.5).abs() < 1e-9);
    let wy = v.y_max - 0.5 * (v.y_max - v.y_min);
    assert!((wy - 5.0).abs() < 1e-9);
}
