//! Loan payment calculator.

use serde::Serialize;

use super::{require_non_negative, require_positive};
use crate::tools::{round_to, ToolError, ToolResult};

/// Amortized loan summary, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanSummary {
    /// Fixed monthly payment
    pub monthly_payment: f64,
    /// Sum of all payments
    pub total_paid: f64,
    /// Interest part of `total_paid`
    pub total_interest: f64,
}

/// Fixed monthly payment for `principal` at `annual_rate_percent` over
/// `months`. A zero rate divides the principal evenly.
///
/// ```
/// use utilkit::tools::calc::loan::loan;
///
/// let summary = loan(200_000.0, 6.0, 360).unwrap();
/// assert_eq!(summary.monthly_payment, 1199.10);
/// ```
pub fn loan(principal: f64, annual_rate_percent: f64, months: u32) -> ToolResult<LoanSummary> {
    let principal = require_positive(principal, "Principal")?;
    let annual_rate = require_non_negative(annual_rate_percent, "Interest rate")?;
    if months == 0 {
        return Err(ToolError::malformed("term must be at least one month"));
    }

    let n = f64::from(months);
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let payment = if monthly_rate == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + monthly_rate).powf(n);
        principal * monthly_rate * growth / (growth - 1.0)
    };
    let total = payment * n;

    Ok(LoanSummary {
        monthly_payment: round_to(payment, 2),
        total_paid: round_to(total, 2),
        total_interest: round_to(total - principal, 2),
    })
}
