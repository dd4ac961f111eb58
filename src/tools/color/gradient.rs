//! CSS gradient generator.

use serde::Serialize;

use crate::models::RgbColor;
use crate::tools::{ToolError, ToolResult};

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GradientKind {
    /// Straight line at `angle` degrees (CSS convention: 0 = to top, 90 = to right)
    Linear {
        /// Direction in degrees
        angle: f64,
    },
    /// Circle from the center outwards
    Radial,
}

/// A color at a position along the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    /// Stop color
    pub color: RgbColor,
    /// Position in percent, `0.0..=100.0`
    pub position: f64,
}

/// A gradient with at least two stops in ascending position order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    /// Geometry
    pub kind: GradientKind,
    /// Color stops sorted by position
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    /// Builds a gradient from colors spread evenly from 0% to 100%.
    pub fn evenly_spaced(kind: GradientKind, colors: &[RgbColor]) -> ToolResult<Self> {
        if colors.len() < 2 {
            return Err(ToolError::invalid_option("a gradient needs at least two colors"));
        }
        let last = (colors.len() - 1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop {
                color,
                position: i as f64 * 100.0 / last,
            })
            .collect();
        Self::new(kind, stops)
    }

    /// Builds a gradient from explicit stops. Stops are sorted by position.
    pub fn new(kind: GradientKind, mut stops: Vec<ColorStop>) -> ToolResult<Self> {
        if stops.len() < 2 {
            return Err(ToolError::invalid_option("a gradient needs at least two colors"));
        }
        if let Some(stop) = stops.iter().find(|s| !(0.0..=100.0).contains(&s.position)) {
            return Err(ToolError::invalid_option(format!(
                "stop position {}% is outside 0..=100",
                stop.position
            )));
        }
        if let GradientKind::Linear { angle } = kind {
            if !angle.is_finite() {
                return Err(ToolError::invalid_option("angle must be a finite number"));
            }
        }
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { kind, stops })
    }

    /// The CSS `background` declaration.
    ///
    /// ```
    /// use utilkit::models::RgbColor;
    /// use utilkit::tools::color::gradient::{Gradient, GradientKind};
    ///
    /// let gradient = Gradient::evenly_spaced(
    ///     GradientKind::Linear { angle: 90.0 },
    ///     &[RgbColor::new(255, 0, 0), RgbColor::new(0, 0, 255)],
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     gradient.to_css(),
    ///     "background: linear-gradient(90deg, #FF0000 0%, #0000FF 100%);"
    /// );
    /// ```
    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color.to_hex(), format_number(s.position)))
            .collect::<Vec<_>>()
            .join(", ");
        match self.kind {
            GradientKind::Linear { angle } => {
                format!("background: linear-gradient({}deg, {stops});", format_number(angle))
            }
            GradientKind::Radial => format!("background: radial-gradient(circle, {stops});"),
        }
    }

    /// Color at `percent` along the gradient.
    pub fn color_at(&self, percent: f64) -> RgbColor {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if percent <= first.position {
            return first.color;
        }
        if percent >= last.position {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if percent <= b.position {
                let span = b.position - a.position;
                let t = if span <= 0.0 { 1.0 } else { (percent - a.position) / span };
                return a.color.lerp(&b.color, t);
            }
        }
        last.color
    }

    /// `n` colors sampled at equal intervals, both ends included.
    pub fn sample(&self, n: usize) -> Vec<RgbColor> {
        match n {
            0 => Vec::new(),
            1 => vec![self.color_at(0.0)],
            _ => (0..n)
                .map(|i| self.color_at(i as f64 * 100.0 / (n - 1) as f64))
                .collect(),
        }
    }
}

/// Formats without a trailing `.0` for whole numbers.
fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}
