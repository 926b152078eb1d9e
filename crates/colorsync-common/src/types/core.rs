use std::fmt;
use std::str::FromStr;

use super::color::{HexColor, DEFAULT_OPACITY};

/// One of the three notations. Each has its own input field and copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    /// Every format, in paste priority order.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb => "RGB",
            ColorFormat::Hsl => "HSL",
        };
        f.pad(name)
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "hsl" => Ok(ColorFormat::Hsl),
            other => Err(format!("unknown color format: {other}")),
        }
    }
}

/// Snapshot of the converter's canonical state.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorState {
    pub color: HexColor,
    pub opacity: f64,
    pub valid: bool,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            color: HexColor::white(),
            opacity: DEFAULT_OPACITY,
            valid: true,
        }
    }
}
