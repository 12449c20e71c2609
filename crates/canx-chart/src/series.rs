// File: crates/canx-chart/src/series.rs
// Summary: Series kinds (time-series vs category) and the renderer-facing Dataset.

use skia_safe as skia;

use crate::axis::AxisId;
use crate::buffer::SharedSamples;

/// Data behind a dataset.
#[derive(Clone, Debug)]
pub enum Series {
    /// (seconds, value) points read live from a shared buffer, in buffer order.
    Time(SharedSamples),
    /// Ordered values plotted against the caller's category labels.
    Category { values: Vec<f64>, labels: Vec<String> },
}

impl Series {
    pub fn point_count(&self) -> usize {
        match self {
            Series::Time(buf) => buf.borrow().len(),
            Series::Category { values, .. } => values.len(),
        }
    }

    /// All y values, for autoscaling.
    pub fn values(&self) -> Vec<f64> {
        match self {
            Series::Time(buf) => buf.borrow().iter().map(|(_, v)| v).collect(),
            Series::Category { values, .. } => values.clone(),
        }
    }

    /// All x values of a time series; category series have none.
    pub fn times(&self) -> Vec<f64> {
        match self {
            Series::Time(buf) => buf.borrow().iter().map(|(t, _)| t).collect(),
            Series::Category { .. } => Vec::new(),
        }
    }
}

/// One drawable line: data, styling and the y axis it is plotted against.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub label: String,
    pub unit: Option<String>,
    pub series: Series,
    pub axis: AxisId,
    pub color: skia::Color,
    pub line_width: f32,
    pub hidden: bool,
}

impl Dataset {
    pub fn new(label: impl Into<String>, series: Series, axis: AxisId, color: skia::Color) -> Self {
        Self { label: label.into(), unit: None, series, axis, color, line_width: 2.0, hidden: false }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        self.unit = if unit.is_empty() { None } else { Some(unit) };
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width.max(0.5);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Legend text: label with the unit in brackets when present.
    pub fn legend_text(&self) -> String {
        match &self.unit {
            Some(u) => format!("{} [{}]", self.label, u),
            None => self.label.clone(),
        }
    }
}
