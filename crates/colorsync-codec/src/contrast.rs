//! WCAG relative luminance and contrast, used to pick swatch label text.

use colorsync_common::Rgb;

use crate::codec::{hex_to_rgb, normalize_hex};

pub fn compute_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.channels().map(|value| {
        let v = f64::from(value) / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    r * 0.2126 + g * 0.7152 + b * 0.0722
}

/// Contrast ratio of two hex colors, `None` if either is not a hex color.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let la = compute_luminance(hex_to_rgb(&normalize_hex(a))?);
    let lb = compute_luminance(hex_to_rgb(&normalize_hex(b))?);
    Some((la.max(lb) + 0.05) / (la.min(lb) + 0.05))
}

/// Whichever candidate contrasts more with `background`; `b` on a tie.
pub fn best_contrast_color<'a>(a: &'a str, b: &'a str, background: &str) -> &'a str {
    match (contrast_ratio(a, background), contrast_ratio(b, background)) {
        (None, _) => b,
        (Some(_), None) => a,
        (Some(ca), Some(cb)) if ca > cb => a,
        _ => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK: &str = "#1a1a1a";
    const LIGHT: &str = "#ffffff";

    #[test]
    fn luminance_extremes() {
        assert_eq!(compute_luminance(Rgb::new(0, 0, 0)), 0.0);
        assert!((compute_luminance(Rgb::new(255, 255, 255)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff").unwrap();
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#ffed24", "#1a1a1a").unwrap();
        let ba = contrast_ratio("#1a1a1a", "#ffed24").unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn contrast_accepts_shorthand() {
        assert_eq!(contrast_ratio("#000", "#fff"), contrast_ratio("#000000", "#ffffff"));
    }

    #[test]
    fn contrast_undefined_for_garbage() {
        assert_eq!(contrast_ratio("tomato", "#ffffff"), None);
        assert_eq!(contrast_ratio("#ffffff", "#12"), None);
    }

    #[test]
    fn dark_text_on_light_background() {
        assert_eq!(best_contrast_color(DARK, LIGHT, "#ffed24"), DARK);
        assert_eq!(best_contrast_color(DARK, LIGHT, "#ffffff"), DARK);
    }

    #[test]
    fn light_text_on_dark_background() {
        assert_eq!(best_contrast_color(DARK, LIGHT, "#000080"), LIGHT);
    }

    #[test]
    fn undefined_candidate_loses() {
        assert_eq!(best_contrast_color("nope", LIGHT, "#ffffff"), LIGHT);
        assert_eq!(best_contrast_color(DARK, "nope", "#000000"), DARK);
    }

    #[test]
    fn tie_picks_second() {
        assert_eq!(best_contrast_color("#000000", "#000", "#ffffff"), "#000");
    }
}
