// File: crates/curve-core/src/transform.rs
// Summary: Cubic transform pipeline: scale up, cube, divide, offset, scale down.

use crate::curve::Curve;
use crate::params::CurveParams;
use crate::range::linspace;

#[derive(Clone, Copy, Debug)]
pub struct CubicTransform {
    params: CurveParams,
}

impl CubicTransform {
    pub fn new(params: CurveParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Map one domain sample to its `(x_out, y_out)` pair.
    ///
    /// The multiplier is applied before dividing by the scale. Overflow is
    /// not checked.
    #[inline]
    pub fn apply(&self, x: f64) -> (f64, f64) {
        let p = &self.params;
        let x_scaled = x * p.scale;
        let y_raw = p.multiplier * (x_scaled * x_scaled * x_scaled) / p.scale;
        let y_adj = y_raw / p.divisor + p.offset;
        (x_scaled / p.scale, y_adj / p.normalization)
    }

    /// Sample the configured domain and evaluate every point.
    pub fn evaluate(&self) -> Curve {
        let xs = linspace(self.params.start, self.params.end, self.params.samples);
        self.evaluate_over(&xs)
    }

    pub fn evaluate_over(&self, xs: &[f64]) -> Curve {
        let points: Vec<(f64, f64)> = xs.iter().map(|&x| self.apply(x)).collect();
        let curve = Curve::from_points(points);
        let bad = curve.non_finite_count();
        if bad > 0 {
            log::warn!("{bad} of {} samples overflowed to a non-finite value", curve.len());
        }
        log::debug!(
            "evaluated {} samples, y range {:?}",
            curve.len(),
            curve.y_range()
        );
        curve
    }
}

impl Default for CubicTransform {
    fn default() -> Self {
        Self::new(CurveParams::default())
    }
}
