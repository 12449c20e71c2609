// File: crates/canx-watch/src/meta.rs
// Summary: Signal metadata as delivered by the metadata fetch, and the static value-range hint derived from it.

use canx_chart::Range;
use serde::{Deserialize, Serialize};

/// Signal description used once when a watcher is created.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalMeta {
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub minimum: Option<f64>,
    #[serde(default)]
    pub maximum: Option<f64>,
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub offset: Option<f64>,
    #[serde(default, alias = "length")]
    pub bit_length: Option<u32>,
    #[serde(default)]
    pub is_signed: bool,
}

impl SignalMeta {
    pub fn with_range(min: f64, max: f64) -> Self {
        Self { minimum: Some(min), maximum: Some(max), ..Self::default() }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Unit string, `None` when absent or blank.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// Raw integer bounds for the bit width: `[0, 2^n-1]` or `[-2^(n-1), 2^(n-1)-1]`.
    pub fn raw_bounds(&self) -> Option<(f64, f64)> {
        let n = self.bit_length.filter(|&n| n > 0)?;
        let n = n.min(64) as i32;
        if self.is_signed {
            let half = 2f64.powi(n - 1);
            Some((-half, half - 1.0))
        } else {
            Some((0.0, 2f64.powi(n) - 1.0))
        }
    }

    /// Physical range hint.
    ///
    /// Finite explicit `minimum`/`maximum` win, except an equal pair which
    /// databases use for "unspecified". Missing sides come from the raw bit-width
    /// bounds through `raw * scale + offset`.
    pub fn static_hint(&self) -> Option<Range> {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        let (mut lo, mut hi) = (finite(self.minimum), finite(self.maximum));
        if let (Some(a), Some(b)) = (lo, hi) {
            if a == b {
                lo = None;
                hi = None;
            }
        }

        if lo.is_none() || hi.is_none() {
            if let Some((raw_lo, raw_hi)) = self.raw_bounds() {
                let scale = finite(self.scale).filter(|s| *s != 0.0).unwrap_or(1.0);
                let offset = finite(self.offset).unwrap_or(0.0);
                let a = raw_lo * scale + offset;
                let b = raw_hi * scale + offset;
                let (phys_lo, phys_hi) = if a <= b { (a, b) } else { (b, a) };
                lo = lo.or(Some(phys_lo));
                hi = hi.or(Some(phys_hi));
            }
        }

        match (lo, hi) {
            (Some(a), Some(b)) if a < b => Some(Range::new(a, b)),
            (Some(a), Some(b)) if a > b => Some(Range::new(b, a)),
            (Some(a), Some(_)) => Some(Range::new(a, a).widen_degenerate()),
            _ => None,
        }
    }
}
