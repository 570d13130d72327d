// File: crates/curve-core/tests/properties.rs
// Purpose: Property checks over arbitrary points in the default domain.

use curve_core::CubicTransform;
use proptest::prelude::*;

proptest! {
    #[test]
    fn odd_around_baseline(x in -100.0f64..100.0) {
        let t = CubicTransform::default();
        let base = t.params().baseline();
        let (_, yp) = t.apply(x);
        let (_, yn) = t.apply(-x);
        let tol = 1e-9 * (1.0 + (yp - base).abs());
        prop_assert!(((yp - base) + (yn - base)).abs() <= tol);
    }

    #[test]
    fn non_decreasing(a in -100.0f64..100.0, b in -100.0f64..100.0) {
        let t = CubicTransform::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(t.apply(lo).1 <= t.apply(hi).1);
    }

    #[test]
    fn x_survives_rescaling(x in -100.0f64..100.0) {
        let (xo, _) = CubicTransform::default().apply(x);
        prop_assert!((xo - x).abs() <= 1e-12 * (1.0 + x.abs()));
    }
}
