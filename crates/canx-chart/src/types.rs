// File: crates/canx-chart/src/types.rs
// Summary: Shared types and constants (sizes, paddings, tick counts).

use serde::{Deserialize, Serialize};

/// Default logical surface width.
pub const WIDTH: f32 = 960.0;
/// Default logical surface height.
pub const HEIGHT: f32 = 420.0;

/// Default number of grid ticks along x.
pub const X_TICKS: usize = 10;
/// Default number of grid ticks along y.
pub const Y_TICKS: usize = 6;

/// Screen margins, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    /// Create new insets; negative inputs are clamped to zero.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }

    /// Padding for time-series plots.
    pub fn time_default() -> Self { Self::new(64.0, 24.0, 16.0, 36.0) }
    /// Padding for category plots; extra bottom room for discrete labels.
    pub fn category_default() -> Self { Self::new(64.0, 24.0, 16.0, 64.0) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::time_default()
    }
}

/// Logical (device-independent) size of a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogicalSize {
    pub width: f32,
    pub height: f32,
}

impl LogicalSize {
    pub fn new(width: f32, height: f32) -> Self { Self { width, height } }
    /// True when either side is zero, negative or not finite.
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Physical size of a backing store, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

impl PixelSize {
    pub fn is_empty(&self) -> bool { self.width <= 0 || self.height <= 0 }
}
