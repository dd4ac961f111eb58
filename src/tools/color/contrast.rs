//! WCAG contrast checker.

use serde::Serialize;

use crate::models::RgbColor;
use crate::tools::round_to;

/// Minimum ratio for AA normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AAA large text.
pub const AAA_LARGE: f64 = 4.5;

/// Contrast ratio of a color pair with WCAG pass flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Text color
    pub foreground: RgbColor,
    /// Background color
    pub background: RgbColor,
    /// Ratio from 1 to 21, two decimals
    pub ratio: f64,
    /// Passes AA for normal text
    pub aa_normal: bool,
    /// Passes AA for large text
    pub aa_large: bool,
    /// Passes AAA for normal text
    pub aaa_normal: bool,
    /// Passes AAA for large text
    pub aaa_large: bool,
}

/// Computes the WCAG 2 contrast ratio between `foreground` and `background`.
/// The pass flags use the rounded ratio.
///
/// ```
/// use utilkit::models::RgbColor;
/// use utilkit::tools::color::contrast::contrast;
///
/// let report = contrast(RgbColor::new(0, 0, 0), RgbColor::new(255, 255, 255));
/// assert_eq!(report.ratio, 21.0);
/// assert!(report.aaa_normal);
/// ```
pub fn contrast(foreground: RgbColor, background: RgbColor) -> ContrastReport {
    let a = foreground.relative_luminance();
    let b = background.relative_luminance();
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    let ratio = round_to((lighter + 0.05) / (darker + 0.05), 2);

    ContrastReport {
        foreground,
        background,
        ratio,
        aa_normal: ratio >= AA_NORMAL,
        aa_large: ratio >= AA_LARGE,
        aaa_normal: ratio >= AAA_NORMAL,
        aaa_large: ratio >= AAA_LARGE,
    }
}
