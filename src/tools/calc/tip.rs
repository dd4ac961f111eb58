//! Tip calculator.

use serde::Serialize;

use super::{require_non_negative, require_positive};
use crate::tools::{round_to, ToolError, ToolResult};

/// Tip split, all amounts rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipBreakdown {
    /// Tip amount
    pub tip: f64,
    /// Bill plus tip
    pub total: f64,
    /// Tip share per person
    pub tip_per_person: f64,
    /// Total share per person
    pub total_per_person: f64,
}

/// Splits `bill` plus a `percent` tip between `people`.
///
/// ```
/// use utilkit::tools::calc::tip::tip;
///
/// let split = tip(100.0, 15.0, 4).unwrap();
/// assert_eq!(split.total, 115.0);
/// assert_eq!(split.total_per_person, 28.75);
/// ```
pub fn tip(bill: f64, percent: f64, people: u32) -> ToolResult<TipBreakdown> {
    let bill = require_positive(bill, "Bill")?;
    let percent = require_non_negative(percent, "Tip percent")?;
    if people == 0 {
        return Err(ToolError::malformed("number of people must be at least 1"));
    }

    let tip = bill * percent / 100.0;
    let total = bill + tip;
    let people = f64::from(people);
    Ok(TipBreakdown {
        tip: round_to(tip, 2),
        total: round_to(total, 2),
        tip_per_person: round_to(tip / people, 2),
        total_per_person: round_to(total / people, 2),
    })
}
