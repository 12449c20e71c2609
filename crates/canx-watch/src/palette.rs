// File: crates/canx-watch/src/palette.rs
// Summary: Colour pool handing out a finite palette to watchers, with an explicit exhaustion policy.

use std::collections::{HashMap, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::key::WatcherKey;

/// What to hand out once every palette colour is taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExhaustionPolicy {
    /// Reuse palette entries in order, cycling.
    #[default]
    RoundRobin,
    /// Reuse a uniformly random palette entry from a seeded generator.
    Random { seed: u64 },
}

/// Acquire/release pool over a palette, keyed by watcher.
///
/// Free colours are handed out in palette order; released colours go to the
/// back of the free list. While exhausted, colours may be shared.
#[derive(Debug)]
pub struct ColorPool {
    palette: Vec<skia::Color>,
    free: VecDeque<usize>,
    held: HashMap<WatcherKey, usize>,
    policy: ExhaustionPolicy,
    cursor: usize,
    rng: Option<StdRng>,
}

impl ColorPool {
    pub fn new(palette: Vec<skia::Color>, policy: ExhaustionPolicy) -> Self {
        let palette = if palette.is_empty() { canx_chart::theme::default_palette() } else { palette };
        let rng = match policy {
            ExhaustionPolicy::Random { seed } => Some(StdRng::seed_from_u64(seed)),
            ExhaustionPolicy::RoundRobin => None,
        };
        let free = (0..palette.len()).collect();
        Self { palette, free, held: HashMap::new(), policy, cursor: 0, rng }
    }

    /// Colour for `key`; repeated calls for a holder return the same colour.
    pub fn acquire(&mut self, key: &WatcherKey) -> skia::Color {
        if let Some(&idx) = self.held.get(key) {
            return self.palette[idx];
        }
        let idx = match self.free.pop_front() {
            Some(idx) => idx,
            None => self.fallback_index(),
        };
        self.held.insert(key.clone(), idx);
        self.palette[idx]
    }

    /// Return `key`'s colour. Returns false if `key` held none.
    pub fn release(&mut self, key: &WatcherKey) -> bool {
        let Some(idx) = self.held.remove(key) else { return false };
        let still_shared = self.held.values().any(|&i| i == idx);
        if !still_shared && !self.free.contains(&idx) {
            self.free.push_back(idx);
        }
        true
    }

    /// Release every colour and restore palette order.
    pub fn reset(&mut self) {
        self.held.clear();
        self.free = (0..self.palette.len()).collect();
        self.cursor = 0;
        if let ExhaustionPolicy::Random { seed } = self.policy {
            self.rng = Some(StdRng::seed_from_u64(seed));
        }
    }

    pub fn color_of(&self, key: &WatcherKey) -> Option<skia::Color> {
        self.held.get(key).map(|&i| self.palette[i])
    }

    pub fn available(&self) -> usize { self.free.len() }
    pub fn palette(&self) -> &[skia::Color] { &self.palette }
    pub fn policy(&self) -> ExhaustionPolicy { self.policy }

    fn fallback_index(&mut self) -> usize {
        let n = self.palette.len();
        match self.rng.as_mut() {
            Some(rng) => rng.random_range(0..n),
            None => {
                let idx = self.cursor % n;
                self.cursor = self.cursor.wrapping_add(1);
                idx
            }
        }
    }
}
