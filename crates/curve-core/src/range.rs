// File: crates/curve-core/src/range.rs
// Summary: Evenly spaced sampling of a closed interval.

/// `num` evenly spaced samples over `[start, end]`.
///
/// Sample `i` is `start + i * step`; the final sample is pinned to `end` so the
/// interval bound survives rounding. `num == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num as f64 - 1.0);
            (0..num)
                .map(|i| if i == num - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
