// File: crates/canx-chart/src/surface.rs
// Summary: Drawing surface wrapper (logical size vs backing-store pixels) and the injected surface factory.

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::ChartError;
use crate::types::{LogicalSize, PixelSize, HEIGHT, WIDTH};

/// Hosting area reported by the embedding application.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostArea {
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
}

fn default_scale_factor() -> f32 { 1.0 }

impl HostArea {
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        Self { width, height, scale_factor }
    }
    pub fn logical_size(&self) -> LogicalSize { LogicalSize::new(self.width, self.height) }
    /// Scale factor with non-finite and non-positive values mapped to 1.
    pub fn effective_scale(&self) -> f32 {
        if self.scale_factor.is_finite() && self.scale_factor > 0.0 { self.scale_factor } else { 1.0 }
    }
    pub fn is_empty(&self) -> bool { self.logical_size().is_empty() }
}

impl Default for HostArea {
    fn default() -> Self { Self::new(WIDTH, HEIGHT, 1.0) }
}

/// Backing-store size for a logical size at a device scale factor.
pub fn backing_pixel_size(logical: LogicalSize, scale_factor: f32) -> PixelSize {
    if logical.is_empty() {
        return PixelSize { width: 0, height: 0 };
    }
    let s = if scale_factor.is_finite() && scale_factor > 0.0 { scale_factor } else { 1.0 };
    PixelSize {
        width: (logical.width * s).round().max(1.0) as i32,
        height: (logical.height * s).round().max(1.0) as i32,
    }
}

/// Produces backing stores for charts. Injected once by the embedding application.
pub trait DrawingSurfaceFactory {
    /// A surface with the given pixel size, or `None` when no drawing context is available.
    fn create(&self, size: PixelSize) -> Option<skia::Surface>;
}

/// CPU raster surfaces (N32 premultiplied).
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterSurfaceFactory;

impl DrawingSurfaceFactory for RasterSurfaceFactory {
    fn create(&self, size: PixelSize) -> Option<skia::Surface> {
        if size.is_empty() { return None; }
        skia::surfaces::raster_n32_premul((size.width, size.height))
    }
}

/// A Skia surface plus the logical size and scale factor it was derived from.
pub struct DrawingSurface {
    surface: skia::Surface,
    logical: LogicalSize,
    scale_factor: f32,
    pixels: PixelSize,
}

impl DrawingSurface {
    /// Create a surface for `host`; fails when the factory yields no context.
    pub fn create(factory: &dyn DrawingSurfaceFactory, host: &HostArea) -> Result<Self, ChartError> {
        let logical = host.logical_size();
        let scale_factor = host.effective_scale();
        let pixels = backing_pixel_size(logical, scale_factor);
        let surface = factory.create(pixels).ok_or(ChartError::SurfaceUnavailable)?;
        Ok(Self { surface, logical, scale_factor, pixels })
    }

    /// Re-derive sizes from `host` and recreate the backing store.
    /// Returns `Ok(false)` without touching anything for a zero-area host.
    pub fn resize(&mut self, factory: &dyn DrawingSurfaceFactory, host: &HostArea) -> Result<bool, ChartError> {
        if host.is_empty() {
            return Ok(false);
        }
        let logical = host.logical_size();
        let scale_factor = host.effective_scale();
        let pixels = backing_pixel_size(logical, scale_factor);
        if pixels != self.pixels {
            self.surface = factory.create(pixels).ok_or(ChartError::SurfaceUnavailable)?;
            self.pixels = pixels;
        }
        self.logical = logical;
        self.scale_factor = scale_factor;
        Ok(true)
    }

    pub fn logical_size(&self) -> LogicalSize { self.logical }
    pub fn scale_factor(&self) -> f32 { self.scale_factor }
    pub fn pixel_size(&self) -> PixelSize { self.pixels }

    pub fn canvas(&mut self) -> &skia::Canvas { self.surface.canvas() }

    /// Clear the whole backing store to `color` in device space.
    pub fn clear(&mut self, color: skia::Color) {
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.clear(color);
    }

    /// Copy the backing store out as tightly packed RGBA8.
    pub fn read_rgba8(&mut self) -> Option<(Vec<u8>, i32, i32, usize)> {
        let PixelSize { width, height } = self.pixels;
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut px = vec![0u8; stride * height as usize];
        if self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            Some((px, width, height, stride))
        } else {
            None
        }
    }

    /// Encode the backing store as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, ChartError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}
