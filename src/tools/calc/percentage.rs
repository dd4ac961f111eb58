//! Percentage calculator.

use crate::tools::{ToolError, ToolResult};

named_options! {
    /// Which percentage question to answer.
    pub enum PercentMode {
        /// What is x% of y
        Of => "of",
        /// x is what percent of y
        Ratio => "ratio",
        /// Percent change from x to y
        Change => "change",
    }
}

/// Answers `mode` for `x` and `y`.
///
/// ```
/// use utilkit::tools::calc::percentage::{calculate, PercentMode};
///
/// assert_eq!(calculate(PercentMode::Of, 20.0, 150.0).unwrap(), 30.0);
/// assert_eq!(calculate(PercentMode::Ratio, 30.0, 150.0).unwrap(), 20.0);
/// assert_eq!(calculate(PercentMode::Change, 50.0, 75.0).unwrap(), 50.0);
/// ```
pub fn calculate(mode: PercentMode, x: f64, y: f64) -> ToolResult<f64> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ToolError::malformed("values must be finite numbers"));
    }

    match mode {
        PercentMode::Of => Ok(x * y / 100.0),
        PercentMode::Ratio => {
            if y == 0.0 {
                return Err(ToolError::malformed("cannot take a percentage of zero"));
            }
            Ok(x * 100.0 / y)
        }
        PercentMode::Change => {
            if x == 0.0 {
                return Err(ToolError::malformed("percent change from zero is undefined"));
            }
            Ok((y - x) * 100.0 / x.abs())
        }
    }
}
