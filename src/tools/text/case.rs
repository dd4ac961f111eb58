//! Case converter.
//!
//! Plain cases (`upper`, `lower`, `title`, `sentence`, `alternating`,
//! `inverse`) keep the original spacing. Identifier cases (`camel`,
//! `pascal`, `snake`, `kebab`, `constant`) split the text into words first.

use crate::tools::{require_input, ToolResult};

named_options! {
    /// Target letter case.
    pub enum TextCase {
        /// ALL UPPERCASE
        Upper => "upper",
        /// all lowercase
        Lower => "lower",
        /// Every Word Capitalized
        Title => "title",
        /// First letter of each sentence capitalized
        Sentence => "sentence",
        /// camelCase
        Camel => "camel",
        /// PascalCase
        Pascal => "pascal",
        /// snake_case
        Snake => "snake",
        /// kebab-case
        Kebab => "kebab",
        /// CONSTANT_CASE
        Constant => "constant",
        /// aLtErNaTiNg
        Alternating => "alternating",
        /// sWAP cASE
        Inverse => "inverse",
    }
}

/// Converts `text` to `case`.
pub fn convert_case(text: &str, case: TextCase) -> ToolResult<String> {
    require_input(text, "Text")?;

    let converted = match case {
        TextCase::Upper => text.to_uppercase(),
        TextCase::Lower => text.to_lowercase(),
        TextCase::Title => title_case(text),
        TextCase::Sentence => sentence_case(text),
        TextCase::Camel => {
            let words = split_words(text);
            let mut out = String::new();
            for (i, word) in words.iter().enumerate() {
                if i == 0 {
                    out.push_str(&word.to_lowercase());
                } else {
                    out.push_str(&capitalize(word));
                }
            }
            out
        }
        TextCase::Pascal => split_words(text).iter().map(|w| capitalize(w)).collect(),
        TextCase::Snake => join_lower(text, "_"),
        TextCase::Kebab => join_lower(text, "-"),
        TextCase::Constant => split_words(text)
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
        TextCase::Alternating => {
            let mut upper = false;
            text.chars()
                .flat_map(|c| {
                    if c.is_alphabetic() {
                        let out: Vec<char> = if upper {
                            c.to_uppercase().collect()
                        } else {
                            c.to_lowercase().collect()
                        };
                        upper = !upper;
                        out
                    } else {
                        vec![c]
                    }
                })
                .collect()
        }
        TextCase::Inverse => text
            .chars()
            .flat_map(|c| {
                if c.is_uppercase() {
                    c.to_lowercase().collect::<Vec<_>>()
                } else {
                    c.to_uppercase().collect::<Vec<_>>()
                }
            })
            .collect(),
    };

    Ok(converted)
}

/// Splits on non-alphanumerics and on lower→upper / acronym boundaries.
///
/// `"parseHTTPResponse v2"` → `["parse", "HTTP", "Response", "v2"]`.
pub fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join_lower(text: &str, separator: &str) -> String {
    split_words(text)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for c in text.chars() {
        if capitalize_next && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
        if matches!(c, '.' | '!' | '?') {
            capitalize_next = true;
        }
    }
    out
}
