//! Color parsing and format conversion.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::models::RgbColor;
use crate::tools::{require_input, ToolError, ToolResult};

/// Basic CSS color keywords.
const NAMED_COLORS: &[(&str, RgbColor)] = &[
    ("black", RgbColor::new(0, 0, 0)),
    ("white", RgbColor::new(255, 255, 255)),
    ("red", RgbColor::new(255, 0, 0)),
    ("lime", RgbColor::new(0, 255, 0)),
    ("green", RgbColor::new(0, 128, 0)),
    ("blue", RgbColor::new(0, 0, 255)),
    ("yellow", RgbColor::new(255, 255, 0)),
    ("cyan", RgbColor::new(0, 255, 255)),
    ("aqua", RgbColor::new(0, 255, 255)),
    ("magenta", RgbColor::new(255, 0, 255)),
    ("fuchsia", RgbColor::new(255, 0, 255)),
    ("gray", RgbColor::new(128, 128, 128)),
    ("grey", RgbColor::new(128, 128, 128)),
    ("silver", RgbColor::new(192, 192, 192)),
    ("maroon", RgbColor::new(128, 0, 0)),
    ("olive", RgbColor::new(128, 128, 0)),
    ("navy", RgbColor::new(0, 0, 128)),
    ("purple", RgbColor::new(128, 0, 128)),
    ("teal", RgbColor::new(0, 128, 128)),
    ("orange", RgbColor::new(255, 165, 0)),
    ("pink", RgbColor::new(255, 192, 203)),
    ("brown", RgbColor::new(165, 42, 42)),
];

fn functional_notation() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| {
        Regex::new(r"^(rgb|hsl|hsv|cmyk)a?\s*\(([^)]*)\)$").expect("static pattern is valid")
    })
}

/// Parses one numeric component, tolerating a `%` or `deg` suffix.
fn component(raw: &str, input: &str) -> ToolResult<f64> {
    let number = raw
        .trim()
        .trim_end_matches('%')
        .trim_end_matches("deg")
        .trim();
    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ToolError::malformed(format!("'{raw}' is not a number in '{input}'")))
}

fn in_range(value: f64, max: f64, what: &str, input: &str) -> ToolResult<f64> {
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ToolError::malformed(format!(
            "{what} {value} is outside 0..={max} in '{input}'"
        )))
    }
}

/// Parses a color written as `#RGB`, `#RRGGBB`, `rgb(r, g, b)`,
/// `hsl(h, s%, l%)`, `hsv(h, s%, v%)`, `cmyk(c%, m%, y%, k%)` or a basic
/// CSS color name. Components may be separated by commas or spaces.
///
/// ```
/// use utilkit::models::RgbColor;
/// use utilkit::tools::color::parse_color;
///
/// assert_eq!(parse_color("rgb(74, 99, 141)").unwrap(), RgbColor::new(74, 99, 141));
/// assert_eq!(parse_color("navy").unwrap(), RgbColor::new(0, 0, 128));
/// ```
pub fn parse_color(input: &str) -> ToolResult<RgbColor> {
    let text = require_input(input, "Color")?.trim().to_lowercase();

    if let Some((_, color)) = NAMED_COLORS.iter().find(|(name, _)| *name == text) {
        return Ok(*color);
    }

    let Some(caps) = functional_notation().captures(&text) else {
        return RgbColor::from_hex(&text);
    };
    let kind = &caps[1];
    let values = caps[2]
        .split(|c: char| c == ',' || c.is_whitespace() || c == '/')
        .filter(|part| !part.is_empty())
        .map(|part| component(part, input))
        .collect::<ToolResult<Vec<f64>>>()?;

    let expected = if kind == "cmyk" { 4 } else { 3 };
    // an optional alpha component is accepted and ignored
    if values.len() != expected && values.len() != expected + 1 {
        return Err(ToolError::malformed(format!(
            "{kind}() takes {expected} components, got {} in '{input}'",
            values.len()
        )));
    }

    match kind {
        "rgb" => {
            let channel = |v: f64| in_range(v, 255.0, "channel", input).map(|v| v.round() as u8);
            Ok(RgbColor::new(
                channel(values[0])?,
                channel(values[1])?,
                channel(values[2])?,
            ))
        }
        "hsl" | "hsv" => {
            let hue = values[0].rem_euclid(360.0);
            let s = in_range(values[1], 100.0, "saturation", input)? / 100.0;
            let third = in_range(values[2], 100.0, "lightness/value", input)? / 100.0;
            Ok(if kind == "hsl" {
                RgbColor::from_hsl(hue, s, third)
            } else {
                RgbColor::from_hsv(hue, s, third)
            })
        }
        _ => {
            let pct = |v: f64| in_range(v, 100.0, "component", input).map(|v| v / 100.0);
            Ok(RgbColor::from_cmyk(
                pct(values[0])?,
                pct(values[1])?,
                pct(values[2])?,
                pct(values[3])?,
            ))
        }
    }
}

/// A color written in every supported notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormats {
    /// `#4A638D`
    pub hex: String,
    /// `rgb(74, 99, 141)`
    pub rgb: String,
    /// `hsl(218, 31%, 42%)`
    pub hsl: String,
    /// `hsv(218, 48%, 55%)`
    pub hsv: String,
    /// `cmyk(48%, 30%, 0%, 45%)`
    pub cmyk: String,
}

impl From<RgbColor> for ColorFormats {
    fn from(color: RgbColor) -> Self {
        let pct = |v: f64| (v * 100.0).round();
        let (h, s, l) = color.to_hsl();
        let (hv, sv, v) = color.to_hsv();
        let (c, m, y, k) = color.to_cmyk();
        Self {
            hex: color.to_hex(),
            rgb: format!("rgb({}, {}, {})", color.r, color.g, color.b),
            hsl: format!("hsl({}, {}%, {}%)", h.round() % 360.0, pct(s), pct(l)),
            hsv: format!("hsv({}, {}%, {}%)", hv.round() % 360.0, pct(sv), pct(v)),
            cmyk: format!("cmyk({}%, {}%, {}%, {}%)", pct(c), pct(m), pct(y), pct(k)),
        }
    }
}

/// Parses `input` and returns every notation for it.
pub fn convert(input: &str) -> ToolResult<ColorFormats> {
    parse_color(input).map(ColorFormats::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_of_reference_color() {
        let formats = convert("#4A638D").unwrap();
        assert_eq!(formats.hex, "#4A638D");
        assert_eq!(formats.rgb, "rgb(74, 99, 141)");
        assert_eq!(formats.hsl, "hsl(218, 31%, 42%)");
        assert_eq!(formats.hsv, "hsv(218, 48%, 55%)");
        assert_eq!(formats.cmyk, "cmyk(48%, 30%, 0%, 45%)");
    }

    #[test]
    fn test_every_notation_parses() {
        let expected = RgbColor::new(255, 0, 0);
        for input in [
            "#f00",
            "FF0000",
            "rgb(255, 0, 0)",
            "RGB(255 0 0)",
            "rgba(255, 0, 0, 0.5)",
            "hsl(0, 100%, 50%)",
            "hsl(360deg 100% 50%)",
            "hsv(0, 100%, 100%)",
            "cmyk(0%, 100%, 100%, 0%)",
            "red",
            "  Red ",
        ] {
            assert_eq!(parse_color(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_round_trip_through_formats() {
        let color = RgbColor::new(12, 200, 77);
        let formats = ColorFormats::from(color);
        assert_eq!(parse_color(&formats.hex).unwrap(), color);
        assert_eq!(parse_color(&formats.rgb).unwrap(), color);
    }

    #[test]
    fn test_malformed() {
        for input in ["#12345", "rgb(300, 0, 0)", "rgb(1, 2)", "hsl(a, b, c)", "notacolor"] {
            assert!(
                matches!(parse_color(input), Err(ToolError::Malformed(_))),
                "{input}"
            );
        }
        assert!(matches!(parse_color(""), Err(ToolError::EmptyInput { .. })));
    }
}
