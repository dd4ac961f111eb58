//! Base64 encoder/decoder.

use ::base64::alphabet;
use ::base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use ::base64::engine::DecodePaddingMode;
use ::base64::Engine as _;

use crate::tools::{require_input, ToolError, ToolResult};

/// URL-safe alphabet; writes no padding and accepts it either way.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

named_options! {
    /// Base64 alphabet.
    pub enum Variant {
        /// `+` and `/`, padded with `=`
        Standard => "standard",
        /// `-` and `_`, no padding
        UrlSafe => "url-safe",
    }
}

named_options! {
    /// Encode or decode.
    pub enum Base64Mode {
        /// Text to Base64
        Encode => "encode",
        /// Base64 to text
        Decode => "decode",
    }
}

/// Encodes the UTF-8 bytes of `text`.
///
/// ```
/// use utilkit::tools::encoding::base64::{encode, Variant};
///
/// assert_eq!(encode("Hello", Variant::Standard).unwrap(), "SGVsbG8=");
/// ```
pub fn encode(text: &str, variant: Variant) -> ToolResult<String> {
    if text.is_empty() {
        return Err(ToolError::EmptyInput { field: "Text" });
    }
    Ok(match variant {
        Variant::Standard => STANDARD.encode(text),
        Variant::UrlSafe => URL_SAFE_LENIENT.encode(text),
    })
}

/// Decodes Base64 back into UTF-8 text. Whitespace is ignored.
pub fn decode(encoded: &str, variant: Variant) -> ToolResult<String> {
    require_input(encoded, "Base64 input")?;

    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = match variant {
        Variant::Standard => STANDARD.decode(&compact),
        Variant::UrlSafe => URL_SAFE_LENIENT.decode(&compact),
    }
    .map_err(|e| ToolError::malformed(format!("invalid Base64: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|_| ToolError::malformed("decoded bytes are not valid UTF-8 text"))
}

/// Runs [`encode`] or [`decode`].
pub fn apply(input: &str, mode: Base64Mode, variant: Variant) -> ToolResult<String> {
    match mode {
        Base64Mode::Encode => encode(input, variant),
        Base64Mode::Decode => decode(input, variant),
    }
}
