//! Turning typed or pasted text into a color plus opacity.
//!
//! Parsers never fail with an error. They report one of three outcomes and
//! the caller decides what an unparseable input means for its own state:
//! a typed field marks itself invalid, a paste just tries the next notation.

mod patterns;


use colorsync_common::{ColorFormat, HexColor, Hsl, Rgb, DEFAULT_OPACITY};
use regex::Captures;
use tracing::debug;

use crate::codec::{
    hex_string_to_opacity, hsl_to_hex, normalize_hex, rgb_to_hex, round_opacity_string,
};
use patterns::{
    PASTE_HEX_RE, PASTE_HSL_RE, PASTE_RGB_RE, TYPED_HEX_RE, TYPED_HSL_RE, TYPED_RGB_RE,
};

/// Which pattern set to match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Plain values typed into an input field (`255, 237, 36`).
    Typed,
    /// Clipboard text in CSS-like notation (`rgb(255, 237, 36)`).
    Paste,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedColor {
    pub color: HexColor,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(ParsedColor),
    /// The text has the right shape but a component is out of bounds.
    OutOfRange,
    NoMatch,
}

impl ParseOutcome {
    /// A structural match stops paste fallthrough even when it is out of range.
    pub fn is_structural(&self) -> bool {
        !matches!(self, ParseOutcome::NoMatch)
    }
}

/// The first notation that structurally matched a paste.
#[derive(Debug, Clone, PartialEq)]
pub struct PasteMatch {
    pub format: ColorFormat,
    pub outcome: ParseOutcome,
}

pub fn parse_as(format: ColorFormat, text: &str, mode: ParseMode) -> ParseOutcome {
    match format {
        ColorFormat::Hex => parse_hex(text, mode),
        ColorFormat::Rgb => parse_rgb(text, mode),
        ColorFormat::Hsl => parse_hsl(text, mode),
    }
}

/// Try hex, then rgb, then hsl, stopping at the first structural match.
pub fn parse_paste(text: &str) -> Option<PasteMatch> {
    for format in ColorFormat::ALL {
        let outcome = parse_as(format, text, ParseMode::Paste);
        if outcome.is_structural() {
            debug!(%format, ?outcome, "paste matched");
            return Some(PasteMatch { format, outcome });
        }
    }
    debug!("paste matched no color notation");
    None
}

pub fn parse_hex(text: &str, mode: ParseMode) -> ParseOutcome {
    let caps = match mode {
        ParseMode::Typed => TYPED_HEX_RE.captures(text),
        ParseMode::Paste => PASTE_HEX_RE.captures(text),
    };
    let Some(caps) = caps else {
        return ParseOutcome::NoMatch;
    };

    let digits = caps[1].to_ascii_lowercase();
    let expanded = normalize_hex(&format!("#{digits}"));
    let Some(color) = HexColor::new(&expanded) else {
        return ParseOutcome::NoMatch;
    };
    let opacity = hex_string_to_opacity(caps.get(2).map(|m| m.as_str()));

    ParseOutcome::Parsed(ParsedColor { color, opacity })
}

pub fn parse_rgb(text: &str, mode: ParseMode) -> ParseOutcome {
    let caps = match mode {
        ParseMode::Typed => TYPED_RGB_RE.captures(text),
        ParseMode::Paste => PASTE_RGB_RE.captures(text),
    };
    let Some(caps) = caps else {
        return ParseOutcome::NoMatch;
    };

    let Some([r, g, b]) = bounded_triple(&caps, [255, 255, 255]) else {
        return ParseOutcome::OutOfRange;
    };
    let Some(opacity) = alpha(&caps) else {
        return ParseOutcome::OutOfRange;
    };

    // Channels are bounded above, so the narrowing casts are lossless.
    let color = rgb_to_hex(Rgb::new(r as u8, g as u8, b as u8));
    ParseOutcome::Parsed(ParsedColor { color, opacity })
}

pub fn parse_hsl(text: &str, mode: ParseMode) -> ParseOutcome {
    let caps = match mode {
        ParseMode::Typed => TYPED_HSL_RE.captures(text),
        ParseMode::Paste => PASTE_HSL_RE.captures(text),
    };
    let Some(caps) = caps else {
        return ParseOutcome::NoMatch;
    };

    let Some([h, s, l]) = bounded_triple(&caps, [359, 100, 100]) else {
        return ParseOutcome::OutOfRange;
    };
    let Some(opacity) = alpha(&caps) else {
        return ParseOutcome::OutOfRange;
    };

    let color = hsl_to_hex(Hsl::new(h, s as u8, l as u8));
    ParseOutcome::Parsed(ParsedColor { color, opacity })
}

/// Capture groups 1-3 as integers, or `None` if any exceeds its bound.
fn bounded_triple(caps: &Captures<'_>, max: [u16; 3]) -> Option<[u16; 3]> {
    let mut values = [0u16; 3];
    for (i, bound) in max.iter().enumerate() {
        let value: u16 = caps.get(i + 1)?.as_str().parse().ok()?;
        if value > *bound {
            return None;
        }
        values[i] = value;
    }
    Some(values)
}

/// Optional alpha in capture group 4, rounded to two decimals.
///
/// Returns `None` when the alpha is present but outside `[0, 1]`.
fn alpha(caps: &Captures<'_>) -> Option<f64> {
    let Some(raw) = caps.get(4) else {
        return Some(DEFAULT_OPACITY);
    };
    let opacity = round_opacity_string(Some(raw.as_str()));
    (0.0..=1.0).contains(&opacity).then_some(opacity)
}
