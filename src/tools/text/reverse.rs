//! Text reverser.

use crate::tools::{require_input, ToolResult};

named_options! {
    /// What unit gets reversed.
    pub enum ReverseMode {
        /// Every character of the whole text
        Character => "character",
        /// Word order within each line
        Word => "word",
        /// Line order
        Line => "line",
    }
}

/// Reverses `text` according to `mode`.
///
/// ```
/// use utilkit::tools::text::reverse::{reverse, ReverseMode};
///
/// assert_eq!(reverse("Hello World", ReverseMode::Character).unwrap(), "dlroW olleH");
/// assert_eq!(reverse("Hello World", ReverseMode::Word).unwrap(), "World Hello");
/// ```
pub fn reverse(text: &str, mode: ReverseMode) -> ToolResult<String> {
    require_input(text, "Text")?;

    let reversed = match mode {
        ReverseMode::Character => text.chars().rev().collect(),
        ReverseMode::Word => text
            .lines()
            .map(|line| line.split_whitespace().rev().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n"),
        ReverseMode::Line => text.lines().rev().collect::<Vec<_>>().join("\n"),
    };

    Ok(reversed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolError;

    #[test]
    fn test_character_mode() {
        assert_eq!(reverse("Hello World", ReverseMode::Character).unwrap(), "dlroW olleH");
        assert_eq!(reverse("añb", ReverseMode::Character).unwrap(), "bña");
    }

    #[test]
    fn test_word_mode_per_line() {
        assert_eq!(
            reverse("one two  three\nfour five", ReverseMode::Word).unwrap(),
            "three two one\nfive four"
        );
    }

    #[test]
    fn test_line_mode() {
        assert_eq!(reverse("a\nb\nc", ReverseMode::Line).unwrap(), "c\nb\na");
        assert_eq!(reverse("a\r\nb", ReverseMode::Line).unwrap(), "b\na");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            reverse("   ", ReverseMode::Line),
            Err(ToolError::EmptyInput { field: "Text" })
        );
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("WORD".parse::<ReverseMode>().unwrap(), ReverseMode::Word);
        assert!("letters".parse::<ReverseMode>().is_err());
    }
}
