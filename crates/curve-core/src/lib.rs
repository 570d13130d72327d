// File: crates/curve-core/src/lib.rs
// Summary: Core library entry point; exports the sampling, parameters, and cubic transform API.

pub mod curve;
pub mod error;
pub mod params;
pub mod range;
pub mod transform;

pub use curve::Curve;
pub use error::ParamsError;
pub use params::CurveParams;
pub use range::linspace;
pub use transform::CubicTransform;

/// Evaluate the interest curve with the default constants.
pub fn evaluate_default() -> Curve {
    CubicTransform::new(CurveParams::default()).evaluate()
}
