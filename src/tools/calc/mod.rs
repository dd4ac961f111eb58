//! Everyday calculators.

pub mod age;
pub mod bmi;
pub mod loan;
pub mod percentage;
pub mod tip;

use crate::tools::{ToolError, ToolResult};

/// Fails with [`ToolError::Malformed`] unless `value` is finite and > 0.
pub(crate) fn require_positive(value: f64, what: &str) -> ToolResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ToolError::malformed(format!("{what} must be greater than zero, got {value}")))
    }
}

/// Fails with [`ToolError::Malformed`] unless `value` is finite and >= 0.
pub(crate) fn require_non_negative(value: f64, what: &str) -> ToolResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ToolError::malformed(format!("{what} must not be negative, got {value}")))
    }
}
