//! colorsync configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use colorsync_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("feedback window: {:?}", config.copy.feedback_delay());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ColorsyncConfig;

use colorsync_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created from the template if it does not exist.
/// An explicit path must exist. The result is validated either way.
pub fn load_config(path: Option<&Path>) -> Result<ColorsyncConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
