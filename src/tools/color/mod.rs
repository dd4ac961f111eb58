//! Color tools: parsing and format conversion, palettes, gradients,
//! dominant colors, color-blindness simulation and contrast checks.

pub mod blindness;
pub mod contrast;
pub mod convert;
pub mod extract;
pub mod gradient;
pub mod palette;

pub use convert::{parse_color, ColorFormats};
