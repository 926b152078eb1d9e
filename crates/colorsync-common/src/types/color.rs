use std::fmt;

/// Opacity a color has until something says otherwise.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// A canonical `#rrggbb` color: always six lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Accepts `#rrggbb` in any letter case. Shorthand and 8-digit forms are
    /// rejected; expand them first.
    pub fn new(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    pub fn white() -> Self {
        Self("#ffffff".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six hex digits without the leading `#`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Red, green and blue channels, each `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Hue in degrees (`0..=359`), saturation and lightness in percent (`0..=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}
