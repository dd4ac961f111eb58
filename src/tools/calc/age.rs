//! Age calculator.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::tools::{ToolError, ToolResult};

/// Age at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    /// Whole years
    pub years: u32,
    /// Months after the last whole year
    pub months: u32,
    /// Days after the last whole month
    pub days: u32,
    /// Days lived
    pub total_days: i64,
    /// Date of the next birthday (today counts)
    pub next_birthday: NaiveDate,
    /// Days until `next_birthday`, 0 on the birthday itself
    pub days_until_birthday: i64,
}

/// The birthday in `year`; Feb 29 falls on Feb 28 in common years.
fn birthday_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Computes the age of someone born on `birth` as of `reference`.
///
/// ```
/// use chrono::NaiveDate;
/// use utilkit::tools::calc::age::age;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let age = age(birth, today).unwrap();
/// assert_eq!((age.years, age.months, age.days), (33, 9, 24));
/// ```
pub fn age(birth: NaiveDate, reference: NaiveDate) -> ToolResult<Age> {
    if birth > reference {
        return Err(ToolError::malformed(format!(
            "birth date {birth} is after {reference}"
        )));
    }

    // whole months first, then the remaining days; adding months clamps
    // to the end of shorter months
    let out_of_range = || ToolError::malformed("date is out of range");
    let span = (reference.year() - birth.year()) * 12 + reference.month() as i32
        - birth.month() as i32;
    let mut whole_months = span.max(0) as u32;
    let mut anchor = birth
        .checked_add_months(Months::new(whole_months))
        .ok_or_else(out_of_range)?;
    if anchor > reference {
        whole_months -= 1;
        anchor = birth
            .checked_add_months(Months::new(whole_months))
            .ok_or_else(out_of_range)?;
    }

    let mut next_birthday = birthday_in(birth, reference.year()).ok_or_else(out_of_range)?;
    if next_birthday < reference {
        next_birthday = birthday_in(birth, reference.year() + 1).ok_or_else(out_of_range)?;
    }

    Ok(Age {
        years: whole_months / 12,
        months: whole_months % 12,
        days: (reference - anchor).num_days() as u32,
        total_days: (reference - birth).num_days(),
        next_birthday,
        days_until_birthday: (next_birthday - reference).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_today() {
        let result = age(date(2000, 6, 1), date(2024, 6, 1)).unwrap();
        assert_eq!((result.years, result.months, result.days), (24, 0, 0));
        assert_eq!(result.days_until_birthday, 0);
    }

    #[test]
    fn test_day_borrow_across_month_end() {
        let result = age(date(2000, 1, 31), date(2000, 3, 1)).unwrap();
        assert_eq!((result.years, result.months, result.days), (0, 1, 1));
        assert_eq!(result.total_days, 30);
    }

    #[test]
    fn test_leap_day_birthday() {
        let result = age(date(2000, 2, 29), date(2023, 2, 1)).unwrap();
        assert_eq!(result.next_birthday, date(2023, 2, 28));
        assert_eq!(result.days_until_birthday, 27);

        let result = age(date(2000, 2, 29), date(2023, 3, 1)).unwrap();
        assert_eq!(result.next_birthday, date(2024, 2, 29));
    }

    #[test]
    fn test_birth_after_reference() {
        assert!(matches!(
            age(date(2030, 1, 1), date(2024, 1, 1)),
            Err(ToolError::Malformed(_))
        ));
    }
}
