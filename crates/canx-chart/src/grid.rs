// File: crates/canx-chart/src/grid.rs
// Summary: Grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Centre position of category slot `index` out of `count` across `[left, right]`.
pub fn category_slot(left: f32, right: f32, index: usize, count: usize) -> f32 {
    let n = count.max(1) as f32;
    let step = (right - left) / n;
    left + step * (index as f32 + 0.5)
}
