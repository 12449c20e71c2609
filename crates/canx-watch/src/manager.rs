// File: crates/canx-watch/src/manager.rs
// Summary: Signal watcher manager: routes samples into watcher buffers and keeps one or many charts in sync.

use std::rc::Rc;

use canx_chart::{
    AxisId, AxisSide, Chart, Dataset, DrawingSurfaceFactory, HostArea, PlotKind, Range, Scale, Scales, Series,
};
use serde::{Deserialize, Serialize};

use crate::config::WatchConfig;
use crate::error::WatchError;
use crate::key::WatcherKey;
use crate::meta::SignalMeta;
use crate::palette::ColorPool;
use crate::view::ViewWindow;
use crate::watcher::Watcher;

/// How watchers are laid out across charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    /// One chart; each watcher gets its own y axis, alternating left/right.
    #[default]
    Combined,
    /// One chart per watcher with a single y axis.
    Separate,
}

/// What happened to an incoming sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleOutcome {
    Accepted,
    /// No enabled watcher for this (message, signal).
    NotWatched,
    /// Non-finite or unparsable value/timestamp; dropped.
    Invalid,
}

/// One decoded signal update from the sample stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalUpdate {
    pub message_id: String,
    pub signal_name: String,
    pub value: f64,
    pub timestamp_seconds: f64,
}

/// Stream payload before the value is known to be numeric.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSignalUpdate {
    message_id: String,
    signal_name: String,
    value: serde_json::Value,
    timestamp_seconds: serde_json::Value,
}

fn json_number(v: &serde_json::Value) -> Option<f64> {
    match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        serde_json::Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// A chart plus the watcher it belongs to (`None` for the combined chart).
/// `chart` is `None` when the host could not provide a surface.
struct ChartSlot {
    owner: Option<WatcherKey>,
    chart: Option<Chart>,
}

pub struct SignalWatcherManager {
    config: WatchConfig,
    factory: Rc<dyn DrawingSurfaceFactory>,
    watchers: Vec<Watcher>,
    pool: ColorPool,
    view: ViewWindow,
    mode: PresentationMode,
    host: HostArea,
    latest_time: Option<f64>,
    slots: Vec<ChartSlot>,
    dirty: bool,
}

impl SignalWatcherManager {
    /// Create a manager and its initial chart set.
    pub fn new(factory: Rc<dyn DrawingSurfaceFactory>, config: WatchConfig) -> Result<Self, WatchError> {
        let palette = config.palette_colors()?;
        let pool = ColorPool::new(palette, config.exhaustion);
        let view = ViewWindow::new(config.view);
        let mode = config.mode;
        let host = config.host;
        let mut mgr = Self {
            config,
            factory,
            watchers: Vec::new(),
            pool,
            view,
            mode,
            host,
            latest_time: None,
            slots: Vec::new(),
            dirty: false,
        };
        mgr.rebuild_charts();
        Ok(mgr)
    }

    // ---- watcher set ---------------------------------------------------------

    /// Start observing a signal. Renders immediately.
    pub fn add_watcher(
        &mut self,
        message_id: impl Into<String>,
        signal_name: impl Into<String>,
        meta: &SignalMeta,
    ) -> Result<WatcherKey, WatchError> {
        let key = WatcherKey::new(message_id, signal_name);
        if self.index_of(&key).is_some() {
            return Err(WatchError::DuplicateWatcher(key));
        }
        let color = self.pool.acquire(&key);
        let watcher = Watcher::new(key.clone(), color, meta, self.config.buffer_capacity);
        log::debug!("watching {key} (hint {:?}, unit {:?})", watcher.static_hint(), watcher.unit());
        self.watchers.push(watcher);
        self.rebuild_charts();
        Ok(key)
    }

    /// Stop observing a signal and return its colour. Removing the last
    /// watcher resets the view. Renders immediately.
    pub fn remove_watcher(&mut self, key: &WatcherKey) -> Result<(), WatchError> {
        let idx = self.index_of(key).ok_or_else(|| WatchError::UnknownWatcher(key.clone()))?;
        self.watchers.remove(idx);
        self.pool.release(key);
        log::debug!("stopped watching {key}");
        if self.watchers.is_empty() {
            self.reset_session();
        }
        self.rebuild_charts();
        Ok(())
    }

    /// Remove every watcher, return all colours and reset the view.
    pub fn clear(&mut self) {
        self.watchers.clear();
        self.pool.reset();
        self.reset_session();
        self.rebuild_charts();
    }

    /// Enable or disable a watcher without dropping its samples. Datasets and
    /// legends are rebuilt; charts are kept.
    pub fn toggle_watcher(&mut self, key: &WatcherKey, enabled: bool) -> Result<(), WatchError> {
        let idx = self.index_of(key).ok_or_else(|| WatchError::UnknownWatcher(key.clone()))?;
        if self.watchers[idx].is_enabled() == enabled {
            return Ok(());
        }
        self.watchers[idx].set_enabled(enabled);
        log::debug!("{} {key}", if enabled { "enabled" } else { "disabled" });
        self.rebuild_datasets();
        self.render_now();
        Ok(())
    }

    // ---- samples -------------------------------------------------------------

    /// Route one sample. Never renders; call [`tick`](Self::tick) on the render cadence.
    pub fn on_sample(&mut self, message_id: &str, signal_name: &str, value: f64, timestamp_seconds: f64) -> SampleOutcome {
        if !value.is_finite() || !timestamp_seconds.is_finite() {
            log::trace!("dropping invalid sample {message_id}.{signal_name} = {value} @ {timestamp_seconds}");
            return SampleOutcome::Invalid;
        }
        let Some(watcher) = self
            .watchers
            .iter_mut()
            .find(|w| w.is_enabled() && w.key().matches(message_id, signal_name))
        else {
            return SampleOutcome::NotWatched;
        };
        watcher.push(timestamp_seconds, value);
        self.latest_time = Some(match self.latest_time {
            Some(t) => t.max(timestamp_seconds),
            None => timestamp_seconds,
        });
        self.dirty = true;
        SampleOutcome::Accepted
    }

    pub fn on_signal_update(&mut self, update: &SignalUpdate) -> SampleOutcome {
        self.on_sample(&update.message_id, &update.signal_name, update.value, update.timestamp_seconds)
    }

    /// Route a JSON stream payload; numeric strings are accepted, anything
    /// unparsable is reported as [`SampleOutcome::Invalid`].
    pub fn on_stream_message(&mut self, payload: &str) -> SampleOutcome {
        let raw: RawSignalUpdate = match serde_json::from_str(payload) {
            Ok(raw) => raw,
            Err(e) => {
                log::trace!("dropping unparsable stream message: {e}");
                return SampleOutcome::Invalid;
            }
        };
        let (Some(value), Some(ts)) = (json_number(&raw.value), json_number(&raw.timestamp_seconds)) else {
            log::trace!("dropping non-numeric update for {}.{}", raw.message_id, raw.signal_name);
            return SampleOutcome::Invalid;
        };
        self.on_sample(&raw.message_id, &raw.signal_name, value, ts)
    }

    // ---- view ----------------------------------------------------------------

    pub fn set_presentation_mode(&mut self, mode: PresentationMode) {
        log::debug!("presentation mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.rebuild_charts();
    }

    pub fn adjust_time_window(&mut self, factor: f64) {
        self.view.adjust_time_window(factor);
        self.refresh_scales();
        self.dirty = true;
    }

    pub fn adjust_value_zoom(&mut self, factor: f64) {
        self.view.adjust_value_zoom(factor);
        self.refresh_scales();
        self.dirty = true;
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
        self.refresh_scales();
        self.dirty = true;
    }

    /// Forward a host resize to every chart. A non-empty host also reopens
    /// slots that had no surface, e.g. charts created before layout.
    pub fn resize(&mut self, host: HostArea) {
        for slot in &mut self.slots {
            let Some(chart) = slot.chart.as_mut() else { continue };
            if let Err(e) = chart.resize(host) {
                log::warn!("chart for {} disabled: {e}", slot_name(&slot.owner));
                slot.chart = None;
            }
        }
        if host.is_empty() {
            return;
        }
        self.host = host;

        let mut reopened = 0usize;
        for i in 0..self.slots.len() {
            if self.slots[i].chart.is_some() {
                continue;
            }
            let chart = self.open_chart(&self.slots[i].owner);
            if chart.is_some() {
                reopened += 1;
            }
            self.slots[i].chart = chart;
        }
        if reopened > 0 {
            log::debug!("reopened {reopened} chart(s) at {}x{}", host.width, host.height);
            self.rebuild_datasets();
            self.render_now();
        }
    }

    /// Render every chart once if anything changed since the last render.
    pub fn tick(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.refresh_scales();
        self.render_now();
        true
    }

    // ---- accessors -----------------------------------------------------------

    pub fn mode(&self) -> PresentationMode { self.mode }
    pub fn view(&self) -> &ViewWindow { &self.view }
    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn latest_time(&self) -> Option<f64> { self.latest_time }
    pub fn config(&self) -> &WatchConfig { &self.config }

    /// Watchers in insertion order.
    pub fn watchers(&self) -> impl Iterator<Item = &Watcher> { self.watchers.iter() }

    pub fn watcher(&self, key: &WatcherKey) -> Option<&Watcher> { self.watchers.iter().find(|w| w.key() == key) }

    pub fn len(&self) -> usize { self.watchers.len() }
    pub fn is_empty(&self) -> bool { self.watchers.is_empty() }

    /// Current display range of a watcher.
    pub fn display_range(&self, key: &WatcherKey) -> Option<Range> {
        self.watcher(key).map(|w| w.display_range(self.view.zoom()))
    }

    /// Visible x range: the window ending at the latest observed sample.
    pub fn x_range(&self) -> Range {
        let window = self.view.window_seconds();
        match self.latest_time {
            Some(end) => Range::new(end - window, end).widen_degenerate(),
            None => Range::new(0.0, window),
        }
    }

    /// Live charts with the watcher each belongs to (`None` for the combined chart).
    pub fn charts(&self) -> impl Iterator<Item = (Option<&WatcherKey>, &Chart)> {
        self.slots.iter().filter_map(|s| s.chart.as_ref().map(|c| (s.owner.as_ref(), c)))
    }

    pub fn charts_mut(&mut self) -> impl Iterator<Item = (Option<&WatcherKey>, &mut Chart)> {
        self.slots.iter_mut().filter_map(|s| s.chart.as_mut().map(|c| (s.owner.as_ref(), c)))
    }

    /// Number of chart slots for the current mode, including disabled ones.
    pub fn chart_slots(&self) -> usize { self.slots.len() }

    // ---- internals -----------------------------------------------------------

    fn index_of(&self, key: &WatcherKey) -> Option<usize> { self.watchers.iter().position(|w| w.key() == key) }

    fn reset_session(&mut self) {
        self.view.reset();
        self.latest_time = None;
    }

    /// Tear down every chart and create the set the current mode needs.
    fn rebuild_charts(&mut self) {
        for slot in &mut self.slots {
            if let Some(chart) = slot.chart.as_mut() {
                chart.destroy();
            }
        }
        let owners: Vec<Option<WatcherKey>> = match self.mode {
            PresentationMode::Combined => vec![None],
            PresentationMode::Separate => self.watchers.iter().map(|w| Some(w.key().clone())).collect(),
        };
        let slots: Vec<ChartSlot> = owners
            .into_iter()
            .map(|owner| {
                let chart = self.open_chart(&owner);
                ChartSlot { owner, chart }
            })
            .collect();
        self.slots = slots;
        log::debug!("rebuilt {} chart(s) in {:?} mode", self.slots.len(), self.mode);
        self.rebuild_datasets();
        self.render_now();
    }

    /// A fresh chart sized for the current host; `None` when no surface is available.
    fn open_chart(&self, owner: &Option<WatcherKey>) -> Option<Chart> {
        let chart = Chart::with_scales(
            Rc::clone(&self.factory),
            self.host,
            self.config.chart.clone(),
            PlotKind::TimeSeries,
            Scales::default(),
        );
        match chart {
            Ok(chart) => Some(chart),
            Err(e) => {
                log::warn!("chart for {} unavailable: {e}", slot_name(owner));
                None
            }
        }
    }

    /// Re-project enabled watchers into datasets for every chart.
    fn rebuild_datasets(&mut self) {
        let line_width = self.config.chart.line_width;
        let combined = self.mode == PresentationMode::Combined;
        for slot in &mut self.slots {
            let Some(chart) = slot.chart.as_mut() else { continue };
            let datasets = self
                .watchers
                .iter()
                .filter(|w| w.is_enabled())
                .filter(|w| slot.owner.as_ref().map_or(true, |k| k == w.key()))
                .map(|w| {
                    let axis = if combined { w.key().axis_id() } else { AxisId::primary() };
                    let ds = Dataset::new(w.key().to_string(), Series::Time(w.buffer()), axis, w.color())
                        .with_line_width(line_width);
                    match w.unit() {
                        Some(u) => ds.with_unit(u),
                        None => ds,
                    }
                })
                .collect();
            chart.set_datasets(datasets);
        }
        self.refresh_scales();
    }

    /// Recompute x and y scales of every chart from the view and watcher ranges.
    fn refresh_scales(&mut self) {
        let x = Scale::from_range("Time", self.x_range());
        let zoom = self.view.zoom();
        for slot in &mut self.slots {
            let Some(chart) = slot.chart.as_mut() else { continue };
            let scales = match &slot.owner {
                None if !self.watchers.iter().any(Watcher::is_enabled) => Scales::single(x.clone(), Scale::default_y()),
                None => {
                    let mut s = Scales::with_x(x.clone());
                    for (i, w) in self.watchers.iter().enumerate().filter(|(_, w)| w.is_enabled()) {
                        let label = w.unit().unwrap_or(w.key().signal_name.as_str()).to_string();
                        let y = Scale::from_range(label, w.display_range(zoom));
                        s.insert_y(w.key().axis_id(), y, AxisSide::alternating(i), Some(w.color()));
                    }
                    s
                }
                Some(owner) => {
                    let y = match self.watchers.iter().find(|w| w.key() == owner) {
                        Some(w) => Scale::from_range(w.unit().unwrap_or(w.key().signal_name.as_str()), w.display_range(zoom)),
                        None => Scale::default_y(),
                    };
                    Scales::single(x.clone(), y)
                }
            };
            chart.scales = scales;
        }
    }

    fn render_now(&mut self) {
        for slot in &mut self.slots {
            if let Some(chart) = slot.chart.as_mut() {
                chart.update();
            }
        }
        self.dirty = false;
    }
}

fn slot_name(owner: &Option<WatcherKey>) -> String {
    match owner {
        Some(k) => k.to_string(),
        None => String::from("combined view"),
    }
}
