//! Number base converter.

use serde::Serialize;

use crate::tools::{require_input, ToolError, ToolResult};

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;
/// Largest supported radix (digits `0-9a-z`).
pub const MAX_BASE: u32 = 36;

/// A value written in the common bases, plus an optional custom one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseConversion {
    /// Base 2
    pub binary: String,
    /// Base 8
    pub octal: String,
    /// Base 10
    pub decimal: String,
    /// Base 16, upper case
    pub hex: String,
    /// The requested extra base and the value written in it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<(u32, String)>,
}

fn check_base(base: u32) -> ToolResult<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ToolError::invalid_option(format!(
            "base {base} is outside {MIN_BASE}..={MAX_BASE}"
        )))
    }
}

/// Parses `value` written in `base`. Accepts a leading `-`, the `0b`/`0o`/`0x`
/// prefix for bases 2/8/16, and `_` digit separators.
pub fn parse(value: &str, base: u32) -> ToolResult<i128> {
    check_base(base)?;
    let trimmed = require_input(value, "Number")?.trim();

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let prefix = match base {
        2 => Some("0b"),
        8 => Some("0o"),
        16 => Some("0x"),
        _ => None,
    };
    let body = prefix
        .and_then(|p| {
            unsigned
                .strip_prefix(p)
                .or_else(|| unsigned.strip_prefix(&p.to_uppercase()))
        })
        .unwrap_or(unsigned);
    let digits: String = body.chars().filter(|&c| c != '_').collect();

    if digits.is_empty() {
        return Err(ToolError::malformed(format!("'{value}' has no digits")));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_digit(base)) {
        return Err(ToolError::malformed(format!(
            "'{bad}' is not a valid base-{base} digit"
        )));
    }

    let magnitude = u128::from_str_radix(&digits, base)
        .map_err(|_| ToolError::malformed(format!("'{value}' is too large")))?;
    if negative {
        0i128
            .checked_sub_unsigned(magnitude)
            .ok_or_else(|| ToolError::malformed(format!("'{value}' is too large")))
    } else {
        i128::try_from(magnitude).map_err(|_| ToolError::malformed(format!("'{value}' is too large")))
    }
}

/// Writes `value` in `base` with lowercase digits above 9.
pub fn format_in_base(value: i128, base: u32) -> ToolResult<String> {
    check_base(base)?;
    if value == 0 {
        return Ok("0".to_string());
    }

    let mut magnitude = value.unsigned_abs();
    let radix = u128::from(base);
    let mut digits = Vec::new();
    while magnitude > 0 {
        let digit = (magnitude % radix) as u32;
        digits.push(char::from_digit(digit, base).unwrap_or('?'));
        magnitude /= radix;
    }
    if value < 0 {
        digits.push('-');
    }
    Ok(digits.iter().rev().collect())
}

/// Converts `value` written in `from_base` into binary, octal, decimal, hex
/// and, when given, `to_base`.
///
/// ```
/// use utilkit::tools::encoding::number_base::convert;
///
/// let result = convert("42", 10, None).unwrap();
/// assert_eq!(result.binary, "101010");
/// assert_eq!(result.hex, "2A");
/// ```
pub fn convert(value: &str, from_base: u32, to_base: Option<u32>) -> ToolResult<BaseConversion> {
    let number = parse(value, from_base)?;
    let custom = match to_base {
        Some(base) => Some((base, format_in_base(number, base)?)),
        None => None,
    };

    Ok(BaseConversion {
        binary: format_in_base(number, 2)?,
        octal: format_in_base(number, 8)?,
        decimal: number.to_string(),
        hex: format_in_base(number, 16)?.to_uppercase(),
        custom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_to_all() {
        let result = convert("255", 10, Some(36)).unwrap();
        assert_eq!(result.binary, "11111111");
        assert_eq!(result.octal, "377");
        assert_eq!(result.decimal, "255");
        assert_eq!(result.hex, "FF");
        assert_eq!(result.custom, Some((36, "73".to_string())));
    }

    #[test]
    fn test_prefixes_and_separators() {
        assert_eq!(parse("0xFF", 16).unwrap(), 255);
        assert_eq!(parse("0B1010", 2).unwrap(), 10);
        assert_eq!(parse("1_000_000", 10).unwrap(), 1_000_000);
        assert_eq!(parse("-0o17", 8).unwrap(), -15);
    }

    #[test]
    fn test_negative_round_trip() {
        let result = convert("-42", 10, None).unwrap();
        assert_eq!(result.binary, "-101010");
        assert_eq!(parse(&result.binary, 2).unwrap(), -42);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(parse(&i128::MIN.to_string(), 10).unwrap(), i128::MIN);
        assert_eq!(parse(&i128::MAX.to_string(), 10).unwrap(), i128::MAX);
        assert!(parse("170141183460469231731687303715884105728", 10).is_err());
    }

    #[test]
    fn test_invalid_digits() {
        assert!(matches!(parse("102", 2), Err(ToolError::Malformed(_))));
        assert!(matches!(parse("0x", 16), Err(ToolError::Malformed(_))));
        assert!(matches!(parse("12", 37), Err(ToolError::InvalidOption(_))));
        assert!(matches!(parse("", 10), Err(ToolError::EmptyInput { .. })));
    }
}
