//! International Morse code.

use crate::tools::{require_input, ToolError, ToolResult};

/// Separator between words in encoded output.
pub const WORD_SEPARATOR: &str = " / ";

const TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

fn code_for(c: char) -> Option<&'static str> {
    let upper = c.to_ascii_uppercase();
    TABLE.iter().find(|(ch, _)| *ch == upper).map(|(_, code)| *code)
}

fn char_for(code: &str) -> Option<char> {
    TABLE.iter().find(|(_, c)| *c == code).map(|(ch, _)| *ch)
}

/// Encodes `text`: letters separated by a space, words by `" / "`.
///
/// ```
/// use utilkit::tools::text::morse::encode;
///
/// assert_eq!(encode("SOS help").unwrap(), "... --- ... / .... . .-.. .--.");
/// ```
pub fn encode(text: &str) -> ToolResult<String> {
    require_input(text, "Text")?;

    let mut words = Vec::new();
    for word in text.split_whitespace() {
        let mut letters = Vec::new();
        for c in word.chars() {
            let code = code_for(c).ok_or_else(|| {
                ToolError::malformed(format!("'{c}' has no Morse code"))
            })?;
            letters.push(code);
        }
        words.push(letters.join(" "));
    }
    Ok(words.join(WORD_SEPARATOR))
}

/// Decodes Morse written with `.` and `-`. Words are separated by `/`
/// (surrounding spaces optional), letters by whitespace. Output is upper
/// case.
pub fn decode(morse: &str) -> ToolResult<String> {
    require_input(morse, "Morse code")?;

    let mut words = Vec::new();
    for word in morse.split('/') {
        let mut decoded = String::new();
        for code in word.split_whitespace() {
            let c = char_for(code).ok_or_else(|| {
                ToolError::malformed(format!("unknown Morse sequence '{code}'"))
            })?;
            decoded.push(c);
        }
        if !decoded.is_empty() {
            words.push(decoded);
        }
    }
    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("sos").unwrap(), "... --- ...");
        assert_eq!(encode("Hi  there").unwrap(), ".... .. / - .... . .-. .");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("... --- ...").unwrap(), "SOS");
        assert_eq!(decode(".... .. /- .... . .-. .").unwrap(), "HI THERE");
    }

    #[test]
    fn test_round_trip_upper_cases() {
        let text = "Meet at 10:30, ok?";
        assert_eq!(decode(&encode(text).unwrap()).unwrap(), text.to_uppercase());
    }

    #[test]
    fn test_unsupported_input() {
        assert!(matches!(encode("héllo"), Err(ToolError::Malformed(_))));
        assert!(matches!(decode("...---..."), Err(ToolError::Malformed(_))));
        assert!(decode("   ").is_err());
    }
}
