// File: crates/canx-chart/src/chart.rs
// Summary: Chart object: owns datasets and scales, renders through an injected drawing surface.

use std::rc::Rc;

use crate::axis::Scales;
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::range::range_for;
use crate::render::{PlotKind, SurfaceRenderer};
use crate::series::Dataset;
use crate::surface::{DrawingSurface, DrawingSurfaceFactory, HostArea};

pub struct Chart {
    pub datasets: Vec<Dataset>,
    pub scales: Scales,
    pub kind: PlotKind,
    config: ChartConfig,
    factory: Rc<dyn DrawingSurfaceFactory>,
    surface: Option<DrawingSurface>,
    renderer: Option<SurfaceRenderer>,
    host: HostArea,
    renders: u64,
}

impl Chart {
    /// Create a chart on a surface from `factory` sized for `host`, then render once.
    ///
    /// Fails with [`ChartError::SurfaceUnavailable`] when the factory yields no
    /// drawing context (including for a zero-area host).
    pub fn new(factory: Rc<dyn DrawingSurfaceFactory>, host: HostArea, config: ChartConfig) -> Result<Self, ChartError> {
        Self::with_scales(factory, host, config, PlotKind::TimeSeries, Scales::default())
    }

    pub fn with_scales(
        factory: Rc<dyn DrawingSurfaceFactory>,
        host: HostArea,
        config: ChartConfig,
        kind: PlotKind,
        scales: Scales,
    ) -> Result<Self, ChartError> {
        let surface = DrawingSurface::create(factory.as_ref(), &host)?;
        let renderer = SurfaceRenderer::new(config.draw_labels);
        let mut chart = Self {
            datasets: Vec::new(),
            scales,
            kind,
            config,
            factory,
            surface: Some(surface),
            renderer: Some(renderer),
            host,
            renders: 0,
        };
        chart.update();
        Ok(chart)
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    /// Replace the dataset list wholesale.
    pub fn set_datasets(&mut self, datasets: Vec<Dataset>) {
        self.datasets = datasets;
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn host(&self) -> HostArea { self.host }
    /// Number of completed render passes.
    pub fn render_count(&self) -> u64 { self.renders }
    pub fn is_destroyed(&self) -> bool { self.surface.is_none() }
    pub fn visible_datasets(&self) -> impl Iterator<Item = &Dataset> { self.datasets.iter().filter(|d| !d.hidden) }

    /// Re-render from the current dataset and scale state. Returns whether a pass ran.
    pub fn update(&mut self) -> bool {
        let (Some(surface), Some(renderer)) = (self.surface.as_mut(), self.renderer.as_ref()) else {
            return false;
        };
        if surface.logical_size().is_empty() {
            return false;
        }
        renderer.render(surface, &self.datasets, &self.scales, self.kind, &self.config);
        self.renders += 1;
        true
    }

    /// React to a host resize. Zero-area hosts are ignored; a factory failure
    /// disables the chart and is reported.
    pub fn resize(&mut self, host: HostArea) -> Result<bool, ChartError> {
        let Some(surface) = self.surface.as_mut() else { return Ok(false) };
        match surface.resize(self.factory.as_ref(), &host) {
            Ok(false) => {
                log::debug!("ignoring zero-area resize {}x{}", host.width, host.height);
                Ok(false)
            }
            Ok(true) => {
                self.host = host;
                Ok(self.update())
            }
            Err(e) => {
                log::warn!("chart surface lost on resize to {}x{}: {e}", host.width, host.height);
                self.surface = None;
                self.renderer = None;
                Err(e)
            }
        }
    }

    /// Clear the surface and release it; later updates and resizes are no-ops.
    pub fn destroy(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.clear(skia_safe::Color::TRANSPARENT);
        }
        self.renderer = None;
        self.datasets.clear();
    }

    /// Fit the x scale to time-series timestamps and every y scale to the
    /// values of the datasets plotted against it, honouring scale hints.
    pub fn autoscale(&mut self) {
        let times: Vec<f64> = self.datasets.iter().flat_map(|d| d.series.times()).collect();
        if !times.is_empty() || self.scales.x.hint != Default::default() {
            let r = range_for(&times, Some(&self.scales.x.hint));
            self.scales.x.set_range(r);
        }
        let ids: Vec<_> = self.scales.y_axes().map(|(id, _)| id.clone()).collect();
        let first = ids.first().cloned();
        for id in ids {
            let values: Vec<f64> = self
                .datasets
                .iter()
                .filter(|d| d.axis == id || (self.scales.y(&d.axis).is_none() && Some(&id) == first.as_ref()))
                .flat_map(|d| d.series.values())
                .collect();
            if let Some(axis) = self.scales.y_mut(&id) {
                axis.scale.fit(&values);
            }
        }
    }

    /// RGBA8 copy of the last render: (pixels, width, height, stride).
    pub fn read_rgba8(&mut self) -> Option<(Vec<u8>, i32, i32, usize)> {
        self.surface.as_mut().and_then(|s| s.read_rgba8())
    }

    /// PNG encoding of the last render.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, ChartError> {
        match self.surface.as_mut() {
            Some(s) => s.encode_png(),
            None => Err(ChartError::SurfaceUnavailable),
        }
    }
}
