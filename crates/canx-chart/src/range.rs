// File: crates/canx-chart/src/range.rs
// Summary: Non-degenerate [min, max] derivation from raw samples and optional caller overrides.

use serde::{Deserialize, Serialize};

/// Relative half-width used to widen a single-valued range.
pub const DEGENERATE_REL_PAD: f64 = 0.05;
/// Minimum total span of a widened non-zero range.
pub const DEGENERATE_MIN_SPAN: f64 = 1.0;

/// Closed numeric interval. Ranges produced by [`range_for`] are finite with `max > min`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const UNIT: Range = Range { min: 0.0, max: 1.0 };

    pub const fn new(min: f64, max: f64) -> Self { Self { min, max } }

    /// Width of the range, saturating at `f64::MAX`.
    pub fn span(&self) -> f64 { (self.max - self.min).min(f64::MAX) }
    /// Midpoint, computed by halves so large bounds do not overflow.
    pub fn center(&self) -> f64 { self.min * 0.5 + self.max * 0.5 }
    pub fn is_finite(&self) -> bool { self.min.is_finite() && self.max.is_finite() }

    /// Scale the span by `factor` around the midpoint. Bounds saturate at the
    /// finite `f64` limits.
    pub fn zoomed(&self, factor: f64) -> Self {
        let center = self.center();
        let half = (self.max * 0.5 - self.min * 0.5) * factor;
        Self::new(saturate(center - half), saturate(center + half))
    }

    /// Smallest range covering every finite value, if there is one.
    pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo.is_finite() && hi.is_finite() { Some(Self::new(lo, hi)) } else { None }
    }

    /// Widen a single-valued range so it has positive span.
    pub fn widen_degenerate(self) -> Self {
        if self.span() > 0.0 {
            return self;
        }
        let v = self.min;
        if v == 0.0 {
            return Self::new(-1.0, 1.0);
        }
        let v = saturate(v);
        let half = (v.abs() * DEGENERATE_REL_PAD).max(DEGENERATE_MIN_SPAN * 0.5);
        Self::new(saturate(v - half), saturate(v + half))
    }
}

/// Clamp to the finite `f64` range; infinities map to the nearest limit.
fn saturate(v: f64) -> f64 { v.clamp(f64::MIN, f64::MAX) }

impl Default for Range {
    fn default() -> Self { Self::UNIT }
}

/// Caller-supplied bounds that take precedence over the data extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeOverride {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl RangeOverride {
    pub fn fixed(min: f64, max: f64) -> Self { Self { min: Some(min), max: Some(max) } }

    fn finite_min(&self) -> Option<f64> { self.min.filter(|v| v.is_finite()) }
    fn finite_max(&self) -> Option<f64> { self.max.filter(|v| v.is_finite()) }
}

/// Range for an axis given raw values and an optional override.
///
/// Non-finite values are ignored; an empty input falls back to `[0, 1]`. A
/// partial override replaces only the side it names. Output is always finite
/// with positive span, except that a complete override is returned verbatim.
pub fn range_for(values: &[f64], overrides: Option<&RangeOverride>) -> Range {
    let ov = overrides.copied().unwrap_or_default();
    if let (Some(min), Some(max)) = (ov.finite_min(), ov.finite_max()) {
        return Range::new(min, max);
    }

    let mut r = Range::extent(values.iter().copied()).unwrap_or(Range::UNIT);
    if let Some(min) = ov.finite_min() {
        r.min = min;
        if r.max < min { r.max = min; }
    }
    if let Some(max) = ov.finite_max() {
        r.max = max;
        if r.min > max { r.min = max; }
    }
    r.widen_degenerate()
}
