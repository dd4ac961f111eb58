//! Color-blindness simulation with per-kind channel matrices.

use crate::models::RgbColor;

named_options! {
    /// Type of color vision deficiency.
    pub enum Deficiency {
        /// No red cones
        Protanopia => "protanopia",
        /// Weak red cones
        Protanomaly => "protanomaly",
        /// No green cones
        Deuteranopia => "deuteranopia",
        /// Weak green cones
        Deuteranomaly => "deuteranomaly",
        /// No blue cones
        Tritanopia => "tritanopia",
        /// Weak blue cones
        Tritanomaly => "tritanomaly",
        /// No color vision
        Achromatopsia => "achromatopsia",
        /// Weak color vision
        Achromatomaly => "achromatomaly",
    }
}

type Matrix = [[f64; 3]; 3];

impl Deficiency {
    /// Row-major matrix applied to `[r, g, b]`.
    pub const fn matrix(self) -> Matrix {
        match self {
            Self::Protanopia => [[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.242, 0.758]],
            Self::Protanomaly => [[0.817, 0.183, 0.0], [0.333, 0.667, 0.0], [0.0, 0.125, 0.875]],
            Self::Deuteranopia => [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]],
            Self::Deuteranomaly => [[0.8, 0.2, 0.0], [0.258, 0.742, 0.0], [0.0, 0.142, 0.858]],
            Self::Tritanopia => [[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]],
            Self::Tritanomaly => [[0.967, 0.033, 0.0], [0.0, 0.733, 0.267], [0.0, 0.183, 0.817]],
            Self::Achromatopsia => [
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
            ],
            Self::Achromatomaly => [
                [0.618, 0.320, 0.062],
                [0.163, 0.775, 0.062],
                [0.163, 0.320, 0.516],
            ],
        }
    }
}

fn apply(matrix: &Matrix, r: u8, g: u8, b: u8) -> [u8; 3] {
    let input = [f64::from(r), f64::from(g), f64::from(b)];
    matrix.map(|row| {
        let v = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
        v.round().clamp(0.0, 255.0) as u8
    })
}

/// How `color` appears with the given deficiency.
///
/// ```
/// use utilkit::models::RgbColor;
/// use utilkit::tools::color::blindness::{simulate, Deficiency};
///
/// let gray = simulate(RgbColor::new(255, 0, 0), Deficiency::Achromatopsia);
/// assert_eq!(gray, RgbColor::new(76, 76, 76));
/// ```
pub fn simulate(color: RgbColor, kind: Deficiency) -> RgbColor {
    let [r, g, b] = apply(&kind.matrix(), color.r, color.g, color.b);
    RgbColor::new(r, g, b)
}

/// Applies [`simulate`] to every pixel of an RGBA8 buffer in place.
/// Alpha is left untouched; a trailing partial pixel is ignored.
pub fn simulate_pixels(pixels: &mut [u8], kind: Deficiency) {
    let matrix = kind.matrix();
    for px in pixels.chunks_exact_mut(4) {
        let [r, g, b] = apply(&matrix, px[0], px[1], px[2]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sum_to_about_one() {
        for kind in Deficiency::ALL {
            for row in kind.matrix() {
                let sum: f64 = row.iter().sum();
                assert!((sum - 1.0).abs() < 2e-3, "{kind}: {row:?}");
            }
        }
    }

    #[test]
    fn test_gray_is_unchanged() {
        let gray = RgbColor::new(120, 120, 120);
        for kind in Deficiency::ALL {
            assert_eq!(simulate(gray, *kind), gray, "{kind}");
        }
    }

    #[test]
    fn test_protanopia_red() {
        assert_eq!(
            simulate(RgbColor::new(255, 0, 0), Deficiency::Protanopia),
            RgbColor::new(145, 142, 0)
        );
    }

    #[test]
    fn test_simulate_pixels_keeps_alpha() {
        let mut pixels = vec![255, 0, 0, 77, 0, 0, 255, 255];
        simulate_pixels(&mut pixels, Deficiency::Achromatopsia);
        assert_eq!(pixels, vec![76, 76, 76, 77, 29, 29, 29, 255]);
    }
}
