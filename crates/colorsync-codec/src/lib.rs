//! Pure color conversions for colorsync.
//!
//! Everything here is free of shared state: hex/rgb/hsl/opacity conversion,
//! parsing typed or pasted text, formatting display and copy strings, and
//! picking a legible label color for a swatch.

pub mod codec;
pub mod contrast;
pub mod format;
pub mod parse;

pub use codec::{
    hex_string_to_opacity, hex_to_rgb, hsl_to_hex, normalize_hex, opacity_to_hex, rgb_to_hex,
    rgb_to_hsl, round_opacity_string,
};
pub use contrast::{best_contrast_color, compute_luminance, contrast_ratio};
pub use parse::{parse_as, parse_paste, ParseMode, ParseOutcome, ParsedColor, PasteMatch};
