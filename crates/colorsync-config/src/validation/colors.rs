//! Color-valued settings must be plain hex.

use crate::schema::ColorsyncConfig;

use super::helpers::validate_hex;

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &ColorsyncConfig) {
    validate_hex(errors, "startup.color", &config.startup.color);
    validate_hex(errors, "contrast.dark", &config.contrast.dark);
    validate_hex(errors, "contrast.light", &config.contrast.light);
}
