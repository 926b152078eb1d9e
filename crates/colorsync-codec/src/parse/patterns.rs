//! Regexes for typed-field and clipboard input.
//!
//! Typed patterns are anchored: the whole field must be a color. Paste
//! patterns are searched anywhere in the pasted text. Digits are ASCII only.

use regex::Regex;
use std::sync::LazyLock;

/// `#rgb` or `#rrggbb`, trailing whitespace allowed.
pub(super) static TYPED_HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#((?:[0-9a-f]{3}){1,2})\s*$").unwrap());

/// `#rgb` or `#rrggbb` with an optional two-digit alpha byte.
pub(super) static PASTE_HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#((?:[0-9a-f]{3}){1,2})([0-9a-f]{2})?").unwrap());

/// `r, g, b` without a function wrapper.
pub(super) static TYPED_RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*$").unwrap()
});

/// `rgb(r,g,b)` or `rgba(r,g,b,o)`.
pub(super) static PASTE_RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)rgba?\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)",
    )
    .unwrap()
});

/// `h, s%, l%` without a function wrapper; the percent signs are optional.
pub(super) static TYPED_HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*%?\s*,\s*([0-9]{1,3})\s*%?\s*$").unwrap()
});

/// `hsl(h,s%,l%)` or `hsla(h,s%,l%,o)`, hue optionally suffixed with `deg`.
pub(super) static PASTE_HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)hsla?\(\s*([0-9]{1,3})\s*(?:deg)?\s*,\s*([0-9]{1,3})\s*%?\s*,\s*([0-9]{1,3})\s*%?\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)",
    )
    .unwrap()
});
