//! Display and copy strings for each notation.

use colorsync_common::{HexColor, Hsl, Rgb, DEFAULT_OPACITY};

use crate::codec::opacity_to_hex;

const SEPARATOR: &str = ", ";

/// `#rrggbb`, with the opacity byte appended when not fully opaque.
pub fn hex_to_string(hex: &HexColor, opacity: f64) -> String {
    format!("{hex}{}", opacity_to_hex(opacity))
}

pub fn rgb_to_string(rgb: Rgb, opacity: f64) -> String {
    if opacity == DEFAULT_OPACITY {
        format!("rgb({})", rgb_to_input_string(rgb))
    } else {
        format!("rgba({}{SEPARATOR}{opacity})", rgb_to_input_string(rgb))
    }
}

pub fn hsl_to_string(hsl: Hsl, opacity: f64) -> String {
    if opacity == DEFAULT_OPACITY {
        format!("hsl({})", hsl_to_input_string(hsl))
    } else {
        format!("hsla({}{SEPARATOR}{opacity})", hsl_to_input_string(hsl))
    }
}

pub fn hsl_to_input_string(hsl: Hsl) -> String {
    format!("{}{SEPARATOR}{}%{SEPARATOR}{}%", hsl.h, hsl.s, hsl.l)
}

pub fn rgb_to_input_string(rgb: Rgb) -> String {
    rgb.channels()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_copy_string() {
        let rgb = Rgb::new(255, 237, 36);
        assert_eq!(rgb_to_string(rgb, 1.0), "rgb(255, 237, 36)");
        assert_eq!(rgb_to_string(rgb, 0.62), "rgba(255, 237, 36, 0.62)");
        assert_eq!(rgb_to_string(rgb, 0.0), "rgba(255, 237, 36, 0)");
    }

    #[test]
    fn hsl_copy_string() {
        let hsl = Hsl::new(55, 100, 57);
        assert_eq!(hsl_to_string(hsl, 1.0), "hsl(55, 100%, 57%)");
        assert_eq!(hsl_to_string(hsl, 0.62), "hsla(55, 100%, 57%, 0.62)");
    }

    #[test]
    fn hex_copy_string() {
        let hex = HexColor::new("#ffed24").unwrap();
        assert_eq!(hex_to_string(&hex, 1.0), "#ffed24");
        assert_eq!(hex_to_string(&hex, 0.62), "#ffed243e");
    }

    #[test]
    fn input_strings_have_no_wrapper() {
        assert_eq!(rgb_to_input_string(Rgb::new(255, 237, 36)), "255, 237, 36");
        assert_eq!(hsl_to_input_string(Hsl::new(55, 100, 57)), "55, 100%, 57%");
    }
}
