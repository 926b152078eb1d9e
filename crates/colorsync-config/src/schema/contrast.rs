//! Swatch label colors.

use serde::{Deserialize, Serialize};

/// The two candidates the swatch label picks between.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    pub dark: String,
    pub light: String,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            dark: "#1a1a1a".into(),
            light: "#ffffff".into(),
        }
    }
}
