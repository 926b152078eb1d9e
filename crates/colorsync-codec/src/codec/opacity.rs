use colorsync_common::DEFAULT_OPACITY;

/// Two-digit hex alpha suffix, or an empty string for full opacity.
///
/// The byte is `round(opacity * 100)`, not a 0-255 scale.
pub fn opacity_to_hex(opacity: f64) -> String {
    if opacity == DEFAULT_OPACITY {
        return String::new();
    }
    let percent = (opacity * 100.0).round().clamp(0.0, 100.0) as u8;
    format!("{percent:02x}")
}

/// Inverse of [`opacity_to_hex`]. Anything but exactly two hex digits means
/// full opacity.
pub fn hex_string_to_opacity(pair: Option<&str>) -> f64 {
    let Some(pair) = pair else {
        return DEFAULT_OPACITY;
    };
    if pair.len() != 2 || !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return DEFAULT_OPACITY;
    }
    match u8::from_str_radix(pair, 16) {
        Ok(byte) => (f64::from(byte) / 100.0).min(1.0),
        Err(_) => DEFAULT_OPACITY,
    }
}

/// Parse an opacity literal and round it to two decimals.
pub fn round_opacity_string(value: Option<&str>) -> f64 {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| (v * 100.0).round() / 100.0)
        .unwrap_or(DEFAULT_OPACITY)
}
