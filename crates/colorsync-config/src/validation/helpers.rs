//! Shared validation helpers used by the section validators.

use colorsync_codec::normalize_hex;
use colorsync_common::HexColor;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is `#rgb` or `#rrggbb`.
pub(crate) fn validate_hex(errors: &mut Vec<String>, name: &str, value: &str) {
    if HexColor::new(&normalize_hex(value.trim())).is_none() {
        errors.push(format!("{name} = {value:?} is not a #rgb or #rrggbb color"));
    }
}
