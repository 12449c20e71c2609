// File: crates/canx-chart/src/buffer.rs
// Summary: Bounded (timestamp, value) buffer shared between a watcher and its dataset.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::range::Range;

/// One sample: seconds on the x axis, value on the y axis.
pub type Sample = (f64, f64);

/// Live handle to a buffer. Single-threaded by construction.
pub type SharedSamples = Rc<RefCell<SampleBuffer>>;

/// Append-only buffer capped at `capacity`; the oldest samples are evicted first.
#[derive(Clone, Debug)]
pub struct SampleBuffer {
    points: VecDeque<Sample>,
    capacity: usize,
}

impl SampleBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { points: VecDeque::with_capacity(capacity.min(4096)), capacity }
    }

    pub fn shared(capacity: usize) -> SharedSamples { Rc::new(RefCell::new(Self::new(capacity))) }

    /// Append a sample, dropping from the front while over capacity.
    /// Returns how many samples were evicted.
    pub fn push(&mut self, t: f64, v: f64) -> usize {
        self.points.push_back((t, v));
        let mut evicted = 0;
        while self.points.len() > self.capacity {
            self.points.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn capacity(&self) -> usize { self.capacity }
    pub fn clear(&mut self) { self.points.clear(); }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ { self.points.iter().copied() }
    pub fn last(&self) -> Option<Sample> { self.points.back().copied() }

    /// Extent of the buffered values.
    pub fn value_extent(&self) -> Option<Range> { Range::extent(self.points.iter().map(|&(_, v)| v)) }
    /// Extent of the buffered timestamps.
    pub fn time_extent(&self) -> Option<Range> { Range::extent(self.points.iter().map(|&(t, _)| t)) }
}
