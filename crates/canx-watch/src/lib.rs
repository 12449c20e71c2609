// File: crates/canx-watch/src/lib.rs
// Summary: Watcher layer entry point; routes live signal samples into charts.

pub mod config;
pub mod error;
pub mod key;
pub mod manager;
pub mod meta;
pub mod palette;
pub mod view;
pub mod watcher;

pub use config::{WatchConfig, DEFAULT_BUFFER_CAPACITY};
pub use error::WatchError;
pub use key::WatcherKey;
pub use manager::{PresentationMode, SampleOutcome, SignalUpdate, SignalWatcherManager};
pub use meta::SignalMeta;
pub use palette::{ColorPool, ExhaustionPolicy};
pub use view::{ViewBounds, ViewWindow};
pub use watcher::Watcher;
