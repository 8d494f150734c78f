//! Colorspace conversion between HSV, RGB and hex text.
//!
//! The palette engine works in the saturation/value unit square; this module
//! turns its coordinates into displayable colors and parses user-supplied
//! anchor colors back into HSV.

use std::ops::Range;

use colornames::Color;

/// An 8-bit sRGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// An HSV color: hue in degrees, saturation and value in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation in `[0, 1]`.
    pub saturation: f64,
    /// Value in `[0, 1]`.
    pub value: f64,
}

impl Hsv {
    /// Build from `(hue, saturation%, value%)` as produced by the engine.
    pub fn from_percent((hue, saturation, value): (f64, f64, f64)) -> Self {
        Self {
            hue,
            saturation: saturation / 100.0,
            value: value / 100.0,
        }
    }

    /// Convert to 8-bit sRGB.
    pub fn to_rgb(self) -> Rgb {
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.value.clamp(0.0, 1.0);
        let h6 = self.hue.rem_euclid(360.0) / 60.0;
        let c = s * v;
        let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h6 as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb([channel(r), channel(g), channel(b)])
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.0.map(|c| f64::from(c) / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Self {
            hue,
            saturation,
            value: max,
        }
    }
}

/// Parse a named or hex color into an [`Rgb`] value.
///
/// Supports CSS color names via `colornames` and short/long hex (RGB/RRGGBB)
/// with or without a leading `#`.
pub fn parse_color(input: &str) -> Result<Rgb, String> {
    fn parse_hex(hex: &str) -> Option<Rgb> {
        let raw = hex.trim_start_matches('#');
        if !raw.as_bytes().iter().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let from_pair =
            |range: Range<usize>| -> Option<u8> { u8::from_str_radix(&raw[range], 16).ok() };
        let from_nibble = |idx: usize| -> Option<u8> {
            u8::from_str_radix(&raw[idx..idx + 1], 16)
                .ok()
                .map(|v| v * 17)
        };

        match raw.len() {
            3 => Some(Rgb([from_nibble(0)?, from_nibble(1)?, from_nibble(2)?])),
            6 => Some(Rgb([from_pair(0..2)?, from_pair(2..4)?, from_pair(4..6)?])),
            _ => None,
        }
    }

    let trimmed = input.trim();
    if let Some(rgb) = parse_hex(trimmed) {
        return Ok(rgb);
    }

    let color: Color = trimmed.try_into().map_err(|_| {
        format!("invalid color '{input}': use a named color or hex (RGB/RRGGBB, leading '#' optional)")
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgb([red, green, blue]))
}
