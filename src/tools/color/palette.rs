//! Palette generator.

use crate::config::{MAX_PALETTE_SIZE, MIN_PALETTE_SIZE};
use crate::models::RgbColor;
use crate::tools::{ToolError, ToolResult};

named_options! {
    /// Color harmony used to build the palette.
    pub enum PaletteScheme {
        /// Base and its opposite hue
        Complementary => "complementary",
        /// Neighbouring hues 30° apart
        Analogous => "analogous",
        /// Three hues 120° apart
        Triadic => "triadic",
        /// Four hues 90° apart
        Tetradic => "tetradic",
        /// Base plus the two hues beside its complement
        SplitComplementary => "split-complementary",
        /// One hue at varying lightness
        Monochromatic => "monochromatic",
        /// Base mixed towards black
        Shades => "shades",
    }
}

/// Hue offsets in degrees for the hue-rotating schemes.
fn hue_offsets(scheme: PaletteScheme) -> &'static [f64] {
    match scheme {
        PaletteScheme::Complementary => &[0.0, 180.0],
        PaletteScheme::Analogous => &[0.0, 30.0, -30.0, 60.0, -60.0],
        PaletteScheme::Triadic => &[0.0, 120.0, 240.0],
        PaletteScheme::Tetradic => &[0.0, 90.0, 180.0, 270.0],
        PaletteScheme::SplitComplementary => &[0.0, 150.0, 210.0],
        PaletteScheme::Monochromatic | PaletteScheme::Shades => &[],
    }
}

/// Builds `size` colors from `base`. The first color is always `base`.
///
/// Hue-based schemes cycle through their hue offsets; once every offset is
/// used, further colors repeat the cycle with a lighter then darker tone.
pub fn generate(base: RgbColor, scheme: PaletteScheme, size: usize) -> ToolResult<Vec<RgbColor>> {
    if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&size) {
        return Err(ToolError::invalid_option(format!(
            "palette size {size} is outside {MIN_PALETTE_SIZE}..={MAX_PALETTE_SIZE}"
        )));
    }

    let (h, s, l) = base.to_hsl();
    let colors = match scheme {
        PaletteScheme::Monochromatic => {
            // evenly spread lightness from 15% to 85%, base first
            let mut colors = vec![base];
            let steps = size - 1;
            for i in 0..steps {
                let lightness = 0.15 + 0.7 * (i as f64) / ((steps.max(2) - 1) as f64);
                colors.push(RgbColor::from_hsl(h, s, lightness));
            }
            colors
        }
        PaletteScheme::Shades => {
            let black = RgbColor::new(0, 0, 0);
            (0..size)
                .map(|i| base.lerp(&black, i as f64 / size as f64))
                .collect()
        }
        _ => {
            let offsets = hue_offsets(scheme);
            (0..size)
                .map(|i| {
                    let hue = (h + offsets[i % offsets.len()]).rem_euclid(360.0);
                    let round = i / offsets.len();
                    let lightness = match round {
                        0 => l,
                        r if r % 2 == 1 => l + (1.0 - l) * 0.35,
                        _ => l * 0.65,
                    };
                    if i == 0 {
                        base
                    } else {
                        RgbColor::from_hsl(hue, s, lightness)
                    }
                })
                .collect()
        }
    };

    Ok(colors)
}

/// CSS custom properties for a palette.
///
/// ```
/// use utilkit::models::RgbColor;
/// use utilkit::tools::color::palette::to_css;
///
/// let css = to_css(&[RgbColor::new(255, 0, 0), RgbColor::new(0, 0, 255)]);
/// assert_eq!(css, ":root {\n  --color-1: #FF0000;\n  --color-2: #0000FF;\n}\n");
/// ```
pub fn to_css(palette: &[RgbColor]) -> String {
    let mut css = String::from(":root {\n");
    for (i, color) in palette.iter().enumerate() {
        css.push_str(&format!("  --color-{}: {};\n", i + 1, color.to_hex()));
    }
    css.push_str("}\n");
    css
}
