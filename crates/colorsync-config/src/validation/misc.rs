//! Validation for numeric settings: startup opacity and copy feedback.

use crate::schema::ColorsyncConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_startup(errors: &mut Vec<String>, config: &ColorsyncConfig) {
    validate_range_f64(errors, "startup.opacity", config.startup.opacity, 0.0, 1.0);
}

pub(crate) fn validate_copy(errors: &mut Vec<String>, config: &ColorsyncConfig) {
    validate_range(errors, "copy.feedback_ms", config.copy.feedback_ms, 100, 60_000);
}
