//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod colors;
mod helpers;
mod misc;


use crate::schema::ColorsyncConfig;
use colorsync_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ColorsyncConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    colors::validate_colors(&mut errors, config);
    misc::validate_startup(&mut errors, config);
    misc::validate_copy(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
