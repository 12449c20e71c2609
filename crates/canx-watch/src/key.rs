// File: crates/canx-watch/src/key.rs
// Summary: Composite watcher identity (message identifier + signal name).

use canx_chart::AxisId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WatcherKey {
    pub message_id: String,
    pub signal_name: String,
}

impl WatcherKey {
    pub fn new(message_id: impl Into<String>, signal_name: impl Into<String>) -> Self {
        Self { message_id: message_id.into(), signal_name: signal_name.into() }
    }

    pub fn matches(&self, message_id: &str, signal_name: &str) -> bool {
        self.message_id == message_id && self.signal_name == signal_name
    }

    /// Y-axis id in a combined chart. The parts are NUL-separated so distinct
    /// keys never share an id, unlike the dotted display form.
    pub fn axis_id(&self) -> AxisId { AxisId(format!("{}\u{0}{}", self.message_id, self.signal_name)) }
}

impl std::fmt::Display for WatcherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.message_id, self.signal_name)
    }
}
