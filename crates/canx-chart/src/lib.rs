// File: crates/canx-chart/src/lib.rs
// Summary: Chart core entry point; exports the drawing surface, range/tick helpers, renderer and Chart.

pub mod axis;
pub mod buffer;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod range;
pub mod render;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::{AxisId, AxisSide, Scale, Scales};
pub use buffer::{Sample, SampleBuffer, SharedSamples};
pub use chart::Chart;
pub use config::ChartConfig;
pub use error::{ChartError, ConfigError};
pub use range::{range_for, Range, RangeOverride};
pub use render::{PlotKind, SurfaceRenderer};
pub use series::{Dataset, Series};
pub use surface::{DrawingSurface, DrawingSurfaceFactory, HostArea, RasterSurfaceFactory};
pub use theme::Theme;
pub use ticks::{format_duration, format_numeric};
