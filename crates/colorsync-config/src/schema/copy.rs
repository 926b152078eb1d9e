//! Clipboard copy behavior.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// How long a copy button shows its "copied" state, in milliseconds
    /// (valid range: 100-60000).
    pub feedback_ms: u32,
}

impl CopyConfig {
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.feedback_ms))
    }
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self { feedback_ms: 3000 }
    }
}
