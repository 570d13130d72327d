// File: crates/curve-core/tests/transform.rs
// Purpose: Validate the numeric properties of the default interest curve.

use curve_core::{evaluate_default, CubicTransform, CurveParams};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

#[test]
fn zero_deviation_yields_baseline() {
    let t = CubicTransform::default();
    let (x, y) = t.apply(0.0);
    assert_eq!(x, 0.0);
    assert!(close(y, 2.0, 1e-12), "y(0) = {y}");
    assert!(close(y, t.params().baseline(), 1e-12));
}

#[test]
fn upper_bound_round_trips() {
    let t = CubicTransform::default();
    let (x, _) = t.apply(100.0);
    assert!(close(x, 100.0, 1e-12), "x_out = {x}");

    let curve = evaluate_default();
    let (last_x, _) = curve.points()[curve.len() - 1];
    assert!(close(last_x, 100.0, 1e-12));
}

#[test]
fn output_length_matches_input_length() {
    let curve = evaluate_default();
    assert_eq!(curve.len(), 600);

    let xs = [-3.0, -1.0, 0.5, 2.0, 9.0];
    let c = CubicTransform::default().evaluate_over(&xs);
    assert_eq!(c.len(), xs.len());
}

#[test]
fn y_is_monotonic_in_x() {
    let curve = evaluate_default();
    let pts = curve.points();
    assert!(pts.windows(2).all(|w| w[0].0 <= w[1].0), "x must be sorted");
    assert!(pts.windows(2).all(|w| w[0].1 <= w[1].1), "y must be sorted");
}

#[test]
fn offset_removed_output_is_odd() {
    let t = CubicTransform::default();
    let base = t.params().baseline();
    for &x in curve_core::linspace(0.0, 100.0, 301).iter() {
        let (_, yp) = t.apply(x);
        let (_, yn) = t.apply(-x);
        let (a, b) = (yp - base, yn - base);
        assert!(close(a, -b, 1e-9), "x={x}: {a} vs {b}");
    }
}

#[test]
fn endpoint_magnitude() {
    // M * 100^3 * S^2 / D / N
    let (_, y) = CubicTransform::default().apply(100.0);
    let expected = 3e12 * 1e6 * 1e36 / 2_102_400.0 / 1e44 + 2.0;
    assert!(close(y, expected, 1e-9), "{y} vs {expected}");
    assert!(y > 14_000.0 && y < 14_500.0);
}

#[test]
fn zero_normalization_overflows_without_panicking() {
    let params = CurveParams { normalization: 0.0, ..CurveParams::default() };
    let curve = CubicTransform::new(params).evaluate();
    assert_eq!(curve.len(), 600);
    assert_eq!(curve.non_finite_count(), 600);
    assert!(curve.y_range().is_none());
}

#[test]
fn custom_domain_is_sampled() {
    let params = CurveParams { start: -1.0, end: 1.0, samples: 11, ..CurveParams::default() };
    let curve = CubicTransform::new(params).evaluate();
    assert_eq!(curve.len(), 11);
    let (lo, hi) = curve.x_range().expect("finite x");
    assert!(close(lo, -1.0, 1e-12) && close(hi, 1.0, 1e-12));
}
