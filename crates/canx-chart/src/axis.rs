// File: crates/canx-chart/src/axis.rs
// Summary: Axis identifiers, per-axis scale state and the scale set of a chart.

use std::collections::BTreeMap;

use crate::range::{range_for, Range, RangeOverride};

/// Identifier a dataset uses to pick its y scale.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxisId(pub String);

impl AxisId {
    /// The single y axis of a chart that has only one.
    pub fn primary() -> Self { Self::from("y") }
}

impl From<&str> for AxisId {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl std::fmt::Display for AxisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

/// Which side of the axis box a y axis is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

impl AxisSide {
    /// Alternating placement by insertion order: left, right, left, ...
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 { AxisSide::Left } else { AxisSide::Right }
    }
}

/// Visible range of one axis plus the caller's override hint.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub hint: RangeOverride,
}

impl Scale {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, hint: RangeOverride::default() }
    }

    pub fn from_range(label: impl Into<String>, r: Range) -> Self { Self::new(label, r.min, r.max) }

    pub fn with_hint(mut self, hint: RangeOverride) -> Self {
        self.hint = hint;
        self
    }

    pub fn range(&self) -> Range { Range::new(self.min, self.max) }

    pub fn set_range(&mut self, r: Range) {
        self.min = r.min;
        self.max = r.max;
    }

    /// Re-derive min/max from `values`, honouring the hint.
    pub fn fit(&mut self, values: &[f64]) {
        let r = range_for(values, Some(&self.hint));
        self.set_range(r);
    }

    pub fn default_x() -> Self { Self::new("Time", 0.0, 10.0) }

    pub fn default_y() -> Self { Self::new("Value", 0.0, 1.0) }
}

/// A y scale and where it is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct YAxis {
    pub scale: Scale,
    pub side: AxisSide,
    /// Tick label colour; `None` uses the theme.
    pub color: Option<skia_safe::Color>,
}

/// Shared x scale plus one or more y scales keyed by [`AxisId`].
#[derive(Clone, Debug, PartialEq)]
pub struct Scales {
    pub x: Scale,
    y: BTreeMap<AxisId, YAxis>,
    order: Vec<AxisId>,
}

impl Scales {
    /// A single x scale and a single left y axis.
    pub fn single(x: Scale, y: Scale) -> Self {
        let mut s = Self { x, y: BTreeMap::new(), order: Vec::new() };
        s.insert_y(AxisId::primary(), y, AxisSide::Left, None);
        s
    }

    /// An x scale with no y axes yet.
    pub fn with_x(x: Scale) -> Self { Self { x, y: BTreeMap::new(), order: Vec::new() } }

    /// Add or replace a y axis; new ids keep insertion order.
    pub fn insert_y(&mut self, id: AxisId, scale: Scale, side: AxisSide, color: Option<skia_safe::Color>) {
        if !self.y.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.y.insert(id, YAxis { scale, side, color });
    }

    pub fn y(&self, id: &AxisId) -> Option<&YAxis> { self.y.get(id) }
    pub fn y_mut(&mut self, id: &AxisId) -> Option<&mut YAxis> { self.y.get_mut(id) }

    /// The y axis used when a dataset's own axis id is unknown.
    pub fn first_y(&self) -> Option<&YAxis> { self.order.first().and_then(|id| self.y.get(id)) }

    /// Y axes in insertion order.
    pub fn y_axes(&self) -> impl Iterator<Item = (&AxisId, &YAxis)> {
        self.order.iter().filter_map(move |id| self.y.get(id).map(|a| (id, a)))
    }

    pub fn y_count(&self) -> usize { self.order.len() }

    /// Count of y axes drawn on `side`.
    pub fn count_on(&self, side: AxisSide) -> usize {
        self.y_axes().filter(|(_, a)| a.side == side).count()
    }
}

impl Default for Scales {
    fn default() -> Self { Self::single(Scale::default_x(), Scale::default_y()) }
}
