use colorsync_common::{HexColor, Hsl, Rgb};

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;
    let lightness = (max + min) / 2.0;

    // Both ends divide 0 by 0 in the general formula.
    let saturation = if lightness == 0.0 {
        0.0
    } else if lightness == 1.0 {
        1.0
    } else if lightness <= 0.5 {
        diff / (max + min)
    } else {
        diff / (2.0 - (max + min))
    };

    let hue = if diff == 0.0 {
        0.0
    } else if max == r {
        (g - b) / diff + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / diff + 2.0
    } else {
        (r - g) / diff + 4.0
    };

    Hsl {
        h: ((hue * 60.0).round() as u16) % 360,
        s: (saturation * 100.0).round() as u8,
        l: (lightness * 100.0).round() as u8,
    }
}

pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    let h = f64::from(hsl.h);
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let value = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    };

    HexColor::from_channels(channel(0.0), channel(8.0), channel(4.0))
}
