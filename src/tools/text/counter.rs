//! Word and character counter.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Reading speed used for the reading-time estimate.
pub const READING_WORDS_PER_MINUTE: usize = 200;
/// Speaking speed used for the speaking-time estimate.
pub const SPEAKING_WORDS_PER_MINUTE: usize = 130;
/// Number of entries in [`TextStats::top_words`].
pub const TOP_WORDS: usize = 5;

/// Counts for a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TextStats {
    /// Unicode scalar values
    pub characters: usize,
    /// Characters excluding whitespace
    pub characters_no_spaces: usize,
    /// Whitespace-separated tokens containing a letter or digit
    pub words: usize,
    /// Runs of text terminated by `.`, `!` or `?` (or end of text)
    pub sentences: usize,
    /// Blocks separated by blank lines
    pub paragraphs: usize,
    /// Lines
    pub lines: usize,
    /// Estimated reading time in seconds
    pub reading_seconds: usize,
    /// Estimated speaking time in seconds
    pub speaking_seconds: usize,
    /// Most frequent words with their counts
    pub top_words: Vec<(String, usize)>,
}

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern is valid"))
}

fn sentence_split() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    cached(&CELL, r"[.!?]+")
}

fn paragraph_split() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    cached(&CELL, r"\n\s*\n")
}

fn word_token() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    cached(&CELL, r"\p{L}[\p{L}\p{N}'’]*")
}

fn has_content(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn seconds_at(words: usize, words_per_minute: usize) -> usize {
    (words * 60).div_ceil(words_per_minute)
}

/// Counts `text`. Empty text yields all zeros.
pub fn count(text: &str) -> TextStats {
    let words = text.split_whitespace().filter(|w| has_content(w)).count();

    let mut frequencies: HashMap<String, usize> = HashMap::new();
    for token in word_token().find_iter(text) {
        *frequencies
            .entry(token.as_str().to_lowercase())
            .or_default() += 1;
    }
    let mut top_words: Vec<(String, usize)> = frequencies.into_iter().collect();
    top_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_words.truncate(TOP_WORDS);

    TextStats {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        sentences: sentence_split().split(text).filter(|s| has_content(s)).count(),
        paragraphs: paragraph_split().split(text).filter(|p| has_content(p)).count(),
        lines: text.lines().count(),
        reading_seconds: seconds_at(words, READING_WORDS_PER_MINUTE),
        speaking_seconds: seconds_at(words, SPEAKING_WORDS_PER_MINUTE),
        top_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_counts() {
        let stats = count("Hello world. How are you?\n\nFine, thanks!");
        assert_eq!(stats.words, 7);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.characters, 40);
        assert_eq!(stats.characters_no_spaces, 33);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(count(""), TextStats::default());
    }

    #[test]
    fn test_punctuation_only_tokens_are_not_words() {
        assert_eq!(count("one - two").words, 2);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        let stats = count(&text);
        assert_eq!(stats.reading_seconds, 61);
        assert_eq!(stats.speaking_seconds, 93);
    }

    #[test]
    fn test_top_words_keep_short_words() {
        let stats = count("Hello world. Hi!");
        assert_eq!(
            stats.top_words,
            vec![
                ("hello".to_string(), 1),
                ("hi".to_string(), 1),
                ("world".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_words() {
        let stats = count("the cat and the dog and the bird. Cat!");
        assert_eq!(
            stats.top_words,
            vec![
                ("the".to_string(), 3),
                ("and".to_string(), 2),
                ("cat".to_string(), 2),
                ("bird".to_string(), 1),
                ("dog".to_string(), 1),
            ]
        );
    }
}
