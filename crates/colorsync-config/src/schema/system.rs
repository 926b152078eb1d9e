//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive for the colorsync crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "colorsync=debug",
            LogLevel::Info => "colorsync=info",
            LogLevel::Warning => "colorsync=warn",
            LogLevel::Error => "colorsync=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
