//! Hex color helpers used by theme tooling

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse `#rrggbb` (leading `#` optional, case-insensitive)
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Scale every channel by `(100 + percent) / 100`
///
/// Input that is not a hex color is returned unchanged.
pub fn lighten(color: &str, percent: f64) -> String {
    scale(color, (100.0 + percent) / 100.0)
}

/// Scale every channel by `(100 - percent) / 100`
pub fn darken(color: &str, percent: f64) -> String {
    scale(color, (100.0 - percent) / 100.0)
}

fn scale(color: &str, factor: f64) -> String {
    let Some(rgb) = hex_to_rgb(color) else {
        return color.to_string();
    };

    let channel = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
    rgb_to_hex(Rgb {
        r: channel(rgb.r),
        g: channel(rgb.g),
        b: channel(rgb.b),
    })
}
