// File: crates/canx-chart/src/error.rs
// Summary: Error types for surface creation, pixel export and configuration loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The host could not provide a usable drawing context.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("failed to encode surface snapshot")]
    Encode,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid colour '{0}', expected #RRGGBB or #AARRGGBB")]
    Color(String),
}
