//! Conversions between hex, RGB, HSL and the opacity scalar.
//!
//! HSL components are rounded to whole numbers after conversion, so an
//! RGB → HSL → RGB trip may drift by one per channel.

mod hsl;
mod opacity;


use colorsync_common::{HexColor, Rgb};

pub use hsl::{hsl_to_hex, rgb_to_hsl};
pub use opacity::{hex_string_to_opacity, opacity_to_hex, round_opacity_string};

/// Expand `#abc` shorthand to `#aabbcc`.
///
/// Six-digit input and anything that is not shorthand come back unchanged;
/// callers validate the shape first.
pub fn normalize_hex(raw: &str) -> String {
    let (prefix, digits) = match raw.strip_prefix('#') {
        Some(digits) => ("#", digits),
        None => ("", raw),
    };
    if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return raw.to_owned();
    }

    let mut out = String::with_capacity(7);
    out.push_str(prefix);
    for c in digits.chars() {
        out.push(c);
        out.push(c);
    }
    out
}

/// Parse a six-digit hex color, with or without the leading `#`.
///
/// Shorthand is rejected, so normalize it first.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    HexColor::from_channels(rgb.r, rgb.g, rgb.b)
}
