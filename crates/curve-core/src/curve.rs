// File: crates/curve-core/src/curve.rs
// Summary: Immutable (x, y) sample sequence produced by the transform.

/// Ordered output of one evaluation. Built once, read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    points: Vec<(f64, f64)>,
}

impl Curve {
    pub(crate) fn from_points(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }

    /// Min/max of the finite x values, `None` when there are none.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        finite_minmax(self.xs())
    }

    /// Min/max of the finite y values, `None` when there are none.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        finite_minmax(self.ys())
    }

    /// Number of points where either coordinate overflowed to inf/NaN.
    pub fn non_finite_count(&self) -> usize {
        self.points
            .iter()
            .filter(|(x, y)| !x.is_finite() || !y.is_finite())
            .count()
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

fn finite_minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
