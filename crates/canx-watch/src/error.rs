// File: crates/canx-watch/src/error.rs
// Summary: Error types for watcher management.

use canx_chart::ConfigError;
use thiserror::Error;

use crate::key::WatcherKey;

#[derive(Debug, Error)]
pub enum WatchError {
    /// A watcher with this key is already active; the existing one is untouched.
    #[error("signal {0} is already being watched")]
    DuplicateWatcher(WatcherKey),
    #[error("signal {0} is not being watched")]
    UnknownWatcher(WatcherKey),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
