// File: crates/canx-chart/src/config.rs
// Summary: Chart layout/styling options with serde support.

use serde::{Deserialize, Serialize};

use crate::theme::{self, Theme};
use crate::types::{Insets, X_TICKS, Y_TICKS};

/// Options shared by every chart a manager creates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Axis box padding for time-series plots.
    pub time_insets: Insets,
    /// Axis box padding for category plots.
    pub category_insets: Insets,
    /// Extra padding per additional y axis on the same side.
    pub axis_gutter: f32,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub line_width: f32,
    pub font_size: f32,
    pub draw_labels: bool,
    pub draw_legend: bool,
    /// Theme preset name, see [`theme::presets`].
    pub theme: String,
}

impl ChartConfig {
    pub fn theme(&self) -> Theme { theme::find(&self.theme) }

    /// Same options with text rendering disabled (deterministic pixels across platforms).
    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            time_insets: Insets::time_default(),
            category_insets: Insets::category_default(),
            axis_gutter: 52.0,
            x_ticks: X_TICKS,
            y_ticks: Y_TICKS,
            line_width: 2.0,
            font_size: 11.0,
            draw_labels: true,
            draw_legend: true,
            theme: String::from("dark"),
        }
    }
}
