// File: crates/canx-watch/src/config.rs
// Summary: Manager configuration (buffer cap, view bounds, palette, chart options) loadable from JSON.

use std::path::Path;

use canx_chart::theme::{default_palette, parse_hex_color, to_hex_color};
use canx_chart::{ChartConfig, ConfigError, HostArea};
use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::manager::PresentationMode;
use crate::palette::ExhaustionPolicy;
use crate::view::ViewBounds;

/// Default per-watcher sample cap.
pub const DEFAULT_BUFFER_CAPACITY: usize = 2000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Samples kept per watcher; the oldest are dropped beyond this.
    pub buffer_capacity: usize,
    pub view: ViewBounds,
    /// Watcher colours as `#RRGGBB`/`#AARRGGBB`, handed out in order.
    pub palette: Vec<String>,
    pub exhaustion: ExhaustionPolicy,
    pub mode: PresentationMode,
    /// Hosting area of each chart panel.
    pub host: HostArea,
    pub chart: ChartConfig,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            view: ViewBounds::default(),
            palette: default_palette().into_iter().map(to_hex_color).collect(),
            exhaustion: ExhaustionPolicy::default(),
            mode: PresentationMode::default(),
            host: HostArea::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl WatchConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parsed palette colours.
    pub fn palette_colors(&self) -> Result<Vec<skia::Color>, ConfigError> {
        self.palette.iter().map(|s| parse_hex_color(s)).collect()
    }

    /// Builder method: set the per-watcher sample cap.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }

    /// Builder method: set the palette exhaustion policy.
    pub fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    /// Builder method: set the chart panel size.
    pub fn with_host(mut self, host: HostArea) -> Self {
        self.host = host;
        self
    }

    /// Builder method: set chart options.
    pub fn with_chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }
}
