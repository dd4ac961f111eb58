//! Text ⇄ character codes.

use crate::tools::{require_input, ToolError, ToolResult};

named_options! {
    /// Number base used for the codes.
    pub enum CodeBase {
        /// Base 2, padded to at least 8 digits
        Binary => "binary",
        /// Base 8
        Octal => "octal",
        /// Base 10
        Decimal => "decimal",
        /// Base 16, upper case, padded to at least 2 digits
        Hex => "hex",
    }
}

impl CodeBase {
    /// Numeric radix.
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Octal => "0o",
            Self::Decimal => "",
            Self::Hex => "0x",
        }
    }
}

/// Each character's code point in `base`, separated by spaces.
///
/// ```
/// use utilkit::tools::text::ascii::{to_codes, CodeBase};
///
/// assert_eq!(to_codes("Hi", CodeBase::Decimal).unwrap(), "72 105");
/// assert_eq!(to_codes("Hi", CodeBase::Binary).unwrap(), "01001000 01101001");
/// ```
pub fn to_codes(text: &str, base: CodeBase) -> ToolResult<String> {
    if text.is_empty() {
        return Err(ToolError::EmptyInput { field: "Text" });
    }

    let codes: Vec<String> = text
        .chars()
        .map(|c| {
            let code = u32::from(c);
            match base {
                CodeBase::Binary => format!("{code:08b}"),
                CodeBase::Octal => format!("{code:o}"),
                CodeBase::Decimal => code.to_string(),
                CodeBase::Hex => format!("{code:02X}"),
            }
        })
        .collect();
    Ok(codes.join(" "))
}

/// Parses space or comma separated codes in `base` back into text. An
/// optional `0b`/`0o`/`0x` prefix matching the base is accepted.
pub fn from_codes(codes: &str, base: CodeBase) -> ToolResult<String> {
    require_input(codes, "Codes")?;

    let mut text = String::new();
    for token in codes.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        let prefix = base.prefix();
        let digits = if prefix.is_empty() {
            token
        } else {
            token
                .strip_prefix(prefix)
                .or_else(|| token.strip_prefix(&prefix.to_uppercase()))
                .unwrap_or(token)
        };
        let value = u32::from_str_radix(digits, base.radix()).map_err(|_| {
            ToolError::malformed(format!("'{token}' is not a valid {base} code"))
        })?;
        let c = char::from_u32(value).ok_or_else(|| {
            ToolError::malformed(format!("{value} is not a valid character code"))
        })?;
        text.push(c);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_codes_every_base() {
        assert_eq!(to_codes("A", CodeBase::Binary).unwrap(), "01000001");
        assert_eq!(to_codes("A", CodeBase::Octal).unwrap(), "101");
        assert_eq!(to_codes("A", CodeBase::Decimal).unwrap(), "65");
        assert_eq!(to_codes("\n", CodeBase::Hex).unwrap(), "0A");
        assert_eq!(to_codes("é", CodeBase::Hex).unwrap(), "E9");
    }

    #[test]
    fn test_from_codes() {
        assert_eq!(from_codes("72 105", CodeBase::Decimal).unwrap(), "Hi");
        assert_eq!(from_codes("0x48,0x69", CodeBase::Hex).unwrap(), "Hi");
        assert_eq!(from_codes("01001000 01101001", CodeBase::Binary).unwrap(), "Hi");
    }

    #[test]
    fn test_from_codes_rejects_bad_digits() {
        assert!(matches!(
            from_codes("12 2", CodeBase::Binary),
            Err(ToolError::Malformed(_))
        ));
        assert!(matches!(
            from_codes("D800", CodeBase::Hex),
            Err(ToolError::Malformed(_))
        ));
    }

    #[test]
    fn test_whitespace_text_is_encoded() {
        assert_eq!(to_codes(" ", CodeBase::Decimal).unwrap(), "32");
        assert!(to_codes("", CodeBase::Decimal).is_err());
    }
}
