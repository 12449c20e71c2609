// File: crates/canx-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for logical-pixel math.

use crate::types::{Insets, LogicalSize};

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Inner box of `size` after removing `insets`; never inverted.
    pub fn inset(size: LogicalSize, insets: &Insets) -> Self {
        let right = (size.width - insets.right).max(insets.left);
        let bottom = (size.height - insets.bottom).max(insets.top);
        Self::from_ltrb(insets.left, insets.top, right, bottom)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
