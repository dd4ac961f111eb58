//! RGB color handling with hex parsing and color-space conversions.

// Allow float comparisons in HSV/HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tools::{ToolError, ToolResult};

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Conversions to and from HSL, HSV and CMYK use the usual textbook formulas
/// with hue in degrees and the remaining components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports "#RRGGBB", "RRGGBB", "#RGB" and "RGB" in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use utilkit::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex("#4A638D").unwrap(), RgbColor::new(74, 99, 141));
    /// assert_eq!(RgbColor::from_hex("f00").unwrap(), RgbColor::new(255, 0, 0));
    /// ```
    pub fn from_hex(hex: &str) -> ToolResult<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ToolError::malformed(format!(
                "Invalid hex color '{trimmed}': only 0-9 and A-F are allowed"
            )));
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => {
                return Err(ToolError::malformed(format!(
                    "Invalid hex color '{trimmed}'. Expected #RGB or #RRGGBB"
                )))
            }
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|e| ToolError::malformed(format!("Invalid hex color '{trimmed}': {e}")))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn unit_channels(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    fn from_unit_channels(r: f64, g: f64, b: f64) -> Self {
        let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Hue in degrees shared by HSL and HSV (0.0 for grayscale).
    fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
        if delta == 0.0 {
            return 0.0;
        }
        let h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    }

    /// Maps chroma/hue back to RGB offsets; shared by HSL and HSV.
    fn from_chroma(h: f64, c: f64, m: f64) -> Self {
        let h_prime = (h.rem_euclid(360.0)) / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self::from_unit_channels(r + m, g + m, b + m)
    }

    /// Converts to HSV as `(h, s, v)`.
    #[must_use]
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };
        (Self::hue(r, g, b, max, delta), s, max)
    }

    /// Creates a color from HSV. Saturation and value are clamped to `0.0..=1.0`.
    #[must_use]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let c = v * s;
        Self::from_chroma(h, c, v - c)
    }

    /// Converts to HSL as `(h, s, l)`.
    ///
    /// ```
    /// use utilkit::models::RgbColor;
    ///
    /// let (h, s, l) = RgbColor::new(74, 99, 141).to_hsl();
    /// assert_eq!((h.round(), (s * 100.0).round(), (l * 100.0).round()), (218.0, 31.0, 42.0));
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        (Self::hue(r, g, b, max, delta), s, l)
    }

    /// Creates a color from HSL. Saturation and lightness are clamped to `0.0..=1.0`.
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        Self::from_chroma(h, c, l - c / 2.0)
    }

    /// Converts to CMYK as `(c, m, y, k)`.
    #[must_use]
    pub fn to_cmyk(&self) -> (f64, f64, f64, f64) {
        let (r, g, b) = self.unit_channels();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            return (0.0, 0.0, 0.0, 1.0);
        }
        (
            (1.0 - r - k) / (1.0 - k),
            (1.0 - g - k) / (1.0 - k),
            (1.0 - b - k) / (1.0 - k),
            k,
        )
    }

    /// Creates a color from CMYK components in `0.0..=1.0`.
    #[must_use]
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        let k = k.clamp(0.0, 1.0);
        Self::from_unit_channels(
            (1.0 - c.clamp(0.0, 1.0)) * (1.0 - k),
            (1.0 - m.clamp(0.0, 1.0)) * (1.0 - k),
            (1.0 - y.clamp(0.0, 1.0)) * (1.0 - k),
        )
    }

    /// WCAG relative luminance in `0.0..=1.0`.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        let linear = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Linear interpolation towards `other` (`t` clamped to `0.0..=1.0`).
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Rotates the hue by `degrees`, keeping saturation and lightness.
    #[must_use]
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl((h + degrees).rem_euclid(360.0), s, l)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
