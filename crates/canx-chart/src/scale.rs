// File: crates/canx-chart/src/scale.rs
// Summary: Linear data-to-pixel transforms for the x (time) and y (value) directions.

use crate::axis::Scale;
use crate::geometry::RectF;

/// Horizontal mapping from a data range onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct XMap {
    pub left_px: f32,
    pub right_px: f32,
    pub min: f64,
    pub max: f64,
}

impl XMap {
    pub fn new(plot: &RectF, scale: &Scale) -> Self {
        Self { left_px: plot.left, right_px: plot.right, min: scale.min, max: scale.max }
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        let span = (self.max - self.min).max(1e-12);
        self.left_px + ((x - self.min) / span) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical mapping from a data range onto `[bottom_px, top_px]` (y grows upward).
#[derive(Clone, Copy, Debug)]
pub struct YMap {
    pub top_px: f32,
    pub bottom_px: f32,
    pub min: f64,
    pub max: f64,
}

impl YMap {
    pub fn new(plot: &RectF, scale: &Scale) -> Self {
        Self { top_px: plot.top, bottom_px: plot.bottom, min: scale.min, max: scale.max }
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.max - self.min).max(1e-12);
        self.bottom_px - ((y - self.min) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
