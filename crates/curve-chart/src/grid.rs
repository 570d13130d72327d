// File: crates/curve-chart/src/grid.rs
// Summary: Grid/tick layout helpers (nice 1/2/5 steps and label formatting).

/// Step close to `span / target` rounded to 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> Option<f64> {
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return None;
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        2.0
    } else if norm < 7.0 {
        5.0
    } else {
        10.0
    };
    Some(nice * mag)
}

/// Tick positions inside `[min, max]` spaced by [`nice_step`].
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let Some(step) = nice_step(max - min, target) else { return Vec::new() };
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // keep an exact zero instead of -0 or 1e-17
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// Format `value` with just enough decimals to tell ticks `step` apart.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let v = if value.abs() < step.abs() * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_nice() {
        let approx = |v: Option<f64>, want: f64| v.map_or(false, |s| (s - want).abs() < want * 1e-12);
        assert!(approx(nice_step(200.0, 10), 20.0));
        assert!(approx(nice_step(1.0, 10), 0.1));
        assert!(approx(nice_step(28_540.0, 8), 5_000.0));
        assert_eq!(nice_step(0.0, 10), None);
        assert_eq!(nice_step(f64::NAN, 10), None);
    }

    #[test]
    fn ticks_cover_symmetric_range() {
        let t = ticks(-100.0, 100.0, 10);
        assert_eq!(t.first(), Some(&-100.0));
        assert_eq!(t.last(), Some(&100.0));
        assert_eq!(t.len(), 11);
        assert!(t.contains(&0.0));
    }

    #[test]
    fn ticks_stay_inside_range() {
        let t = ticks(-0.37, 2.91, 6);
        assert!(t.iter().all(|&v| v >= -0.37 && v <= 2.91));
        assert!(!t.is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(format_tick(20.0, 20.0), "20");
        assert_eq!(format_tick(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick(-1e-18, 5.0), "0");
        assert_eq!(format_tick(-5000.0, 5000.0), "-5000");
    }
}
