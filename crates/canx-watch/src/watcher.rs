// File: crates/canx-watch/src/watcher.rs
// Summary: One observed signal: identity, styling, range hint and its bounded sample buffer.

use std::rc::Rc;

use canx_chart::{Range, SampleBuffer, SharedSamples};
use skia_safe as skia;

use crate::key::WatcherKey;
use crate::meta::SignalMeta;

#[derive(Debug)]
pub struct Watcher {
    key: WatcherKey,
    color: skia::Color,
    unit: Option<String>,
    enabled: bool,
    hint: Option<Range>,
    buffer: SharedSamples,
    extent: Option<Range>,
}

impl Watcher {
    pub fn new(key: WatcherKey, color: skia::Color, meta: &SignalMeta, capacity: usize) -> Self {
        Self {
            key,
            color,
            unit: meta.unit().map(str::to_string),
            enabled: true,
            hint: meta.static_hint(),
            buffer: SampleBuffer::shared(capacity),
            extent: None,
        }
    }

    pub fn key(&self) -> &WatcherKey { &self.key }
    pub fn color(&self) -> skia::Color { self.color }
    pub fn unit(&self) -> Option<&str> { self.unit.as_deref() }
    pub fn is_enabled(&self) -> bool { self.enabled }
    pub fn static_hint(&self) -> Option<Range> { self.hint }

    /// Live handle shared with datasets.
    pub fn buffer(&self) -> SharedSamples { Rc::clone(&self.buffer) }
    pub fn len(&self) -> usize { self.buffer.borrow().len() }
    pub fn is_empty(&self) -> bool { self.buffer.borrow().is_empty() }
    pub fn samples(&self) -> Vec<(f64, f64)> { self.buffer.borrow().iter().collect() }

    pub(crate) fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }

    /// Append a sample and keep the value extent current.
    pub(crate) fn push(&mut self, t: f64, v: f64) {
        let mut buf = self.buffer.borrow_mut();
        let evicted_front = buf.iter().next();
        let evicted = buf.push(t, v);
        let extreme_evicted = evicted > 0
            && match (evicted_front, self.extent) {
                (Some((_, old)), Some(r)) => old <= r.min || old >= r.max,
                _ => true,
            };
        self.extent = if extreme_evicted {
            buf.value_extent()
        } else {
            match self.extent {
                Some(r) => Some(Range::new(r.min.min(v), r.max.max(v))),
                None => Some(Range::new(v, v)),
            }
        };
    }

    /// Extent of the buffered values.
    pub fn extent(&self) -> Option<Range> { self.extent }

    /// Visible value range: data extent (or the static hint while empty)
    /// scaled around its midpoint by `zoom`, widened if it has no span.
    pub fn display_range(&self, zoom: f64) -> Range {
        let base = self.extent.or(self.hint).unwrap_or(Range::UNIT);
        base.zoomed(zoom).widen_degenerate()
    }
}
