//! Configuration schema types for colorsync.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod contrast;
mod copy;
mod startup;
mod system;

pub use contrast::*;
pub use copy::*;
pub use startup::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for colorsync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ColorsyncConfig {
    pub startup: StartupConfig,
    pub contrast: ContrastConfig,
    pub copy: CopyConfig,
    pub logging: LoggingConfig,
}
