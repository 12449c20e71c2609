// File: crates/canx-watch/src/view.rs
// Summary: Global observation window and vertical zoom, clamped to configured bounds.

use canx_chart::geometry::clamp;
use serde::{Deserialize, Serialize};

/// Defaults and limits for [`ViewWindow`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewBounds {
    pub default_window_seconds: f64,
    pub min_window_seconds: f64,
    pub max_window_seconds: f64,
    pub default_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self {
            default_window_seconds: 30.0,
            min_window_seconds: 1.0,
            max_window_seconds: 600.0,
            default_zoom: 1.0,
            min_zoom: 0.25,
            max_zoom: 6.0,
        }
    }
}

impl ViewBounds {
    /// Same bounds with each min/max pair ordered and defaults pulled inside them.
    pub fn normalized(mut self) -> Self {
        if self.min_window_seconds > self.max_window_seconds {
            std::mem::swap(&mut self.min_window_seconds, &mut self.max_window_seconds);
        }
        if self.min_zoom > self.max_zoom {
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        self.default_window_seconds = clamp(self.default_window_seconds, self.min_window_seconds, self.max_window_seconds);
        self.default_zoom = clamp(self.default_zoom, self.min_zoom, self.max_zoom);
        self
    }
}

/// Time-window length (seconds) and value zoom multiplier shared by every watcher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    window_seconds: f64,
    zoom: f64,
    bounds: ViewBounds,
}

impl ViewWindow {
    pub fn new(bounds: ViewBounds) -> Self {
        let bounds = bounds.normalized();
        Self { window_seconds: bounds.default_window_seconds, zoom: bounds.default_zoom, bounds }
    }

    pub fn window_seconds(&self) -> f64 { self.window_seconds }
    pub fn zoom(&self) -> f64 { self.zoom }
    pub fn bounds(&self) -> &ViewBounds { &self.bounds }

    /// Multiply the window length by `factor` and clamp. Returns whether it changed.
    pub fn adjust_time_window(&mut self, factor: f64) -> bool {
        if !valid_factor(factor) { return false; }
        let b = &self.bounds;
        let next = clamp(self.window_seconds * factor, b.min_window_seconds, b.max_window_seconds);
        let changed = next != self.window_seconds;
        self.window_seconds = next;
        changed
    }

    /// Multiply the zoom by `factor` and clamp. Returns whether it changed.
    pub fn adjust_value_zoom(&mut self, factor: f64) -> bool {
        if !valid_factor(factor) { return false; }
        let b = &self.bounds;
        let next = clamp(self.zoom * factor, b.min_zoom, b.max_zoom);
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }

    pub fn reset(&mut self) {
        self.window_seconds = self.bounds.default_window_seconds;
        self.zoom = self.bounds.default_zoom;
    }

    pub fn is_default(&self) -> bool {
        self.window_seconds == self.bounds.default_window_seconds && self.zoom == self.bounds.default_zoom
    }
}

impl Default for ViewWindow {
    fn default() -> Self { Self::new(ViewBounds::default()) }
}

fn valid_factor(f: f64) -> bool { f.is_finite() && f > 0.0 }
