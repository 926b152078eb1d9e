//! Initial converter state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Hex color shown at launch, `#rgb` or `#rrggbb`.
    pub color: String,
    /// Initial opacity (valid range: 0.0-1.0).
    pub opacity: f64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".into(),
            opacity: 1.0,
        }
    }
}
