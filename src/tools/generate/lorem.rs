//! Lorem ipsum placeholder text.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::tools::{ToolError, ToolResult};

/// Largest count accepted for any unit.
pub const MAX_COUNT: usize = 1000;

/// Opening of the classic passage.
pub const CLASSIC_OPENING: &str = "Lorem ipsum dolor sit amet";

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum", "praesent", "luctus", "porta", "lacus", "vitae",
    "mauris", "viverra", "felis", "tortor", "pellentesque", "habitant", "morbi", "tristique",
    "senectus", "netus", "malesuada", "fames", "turpis", "egestas", "vestibulum", "ante",
    "primis", "faucibus", "orci", "ultrices", "posuere", "cubilia", "curae",
];

named_options! {
    /// What to count.
    pub enum LoremUnit {
        /// Paragraphs separated by blank lines
        Paragraphs => "paragraphs",
        /// Sentences on one line
        Sentences => "sentences",
        /// Bare words
        Words => "words",
    }
}

/// Generation options.
#[derive(Debug, Clone, Copy)]
pub struct LoremOptions {
    /// Begin with "Lorem ipsum dolor sit amet"
    pub start_with_lorem: bool,
    /// Seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for LoremOptions {
    fn default() -> Self {
        Self {
            start_with_lorem: true,
            seed: None,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

fn words<R: Rng>(rng: &mut R, n: usize) -> Vec<&'static str> {
    (0..n)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect()
}

fn sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(6..=14);
    let mut parts = words(rng, count);
    // occasional comma after a word in the first half
    if count > 8 && rng.gen_bool(0.4) {
        let at = rng.gen_range(2..count / 2);
        let with_comma = format!("{},", parts[at]);
        let mut text = capitalize(&parts[..at].join(" "));
        text.push(' ');
        text.push_str(&with_comma);
        text.push(' ');
        parts.drain(..=at);
        text.push_str(&parts.join(" "));
        text.push('.');
        return text;
    }
    format!("{}.", capitalize(&parts.join(" ")))
}

fn paragraph<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(4..=7);
    (0..count).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}

/// Replaces the start of `text` with the classic opening.
fn with_classic_opening(text: &str, unit: LoremUnit) -> String {
    match unit {
        LoremUnit::Words => {
            let opening: Vec<String> =
                CLASSIC_OPENING.split(' ').map(str::to_lowercase).collect();
            let rest: Vec<&str> = text.split(' ').skip(opening.len()).collect();
            let mut all = opening;
            all.extend(rest.iter().map(|w| (*w).to_string()));
            let n = text.split(' ').count();
            all.truncate(n);
            all.join(" ")
        }
        LoremUnit::Sentences | LoremUnit::Paragraphs => {
            // first sentence becomes "Lorem ipsum dolor sit amet, <rest of it>"
            let first_end = text.find('.').unwrap_or(text.len());
            let first = &text[..first_end];
            let tail: Vec<&str> = first.split(' ').skip(2).collect();
            let mut sentence = format!("{CLASSIC_OPENING},");
            if !tail.is_empty() {
                sentence.push(' ');
                sentence.push_str(&tail.join(" ").to_lowercase());
            }
            format!("{sentence}{}", &text[first_end..])
        }
    }
}

/// Generates `count` units of placeholder text.
///
/// ```
/// use utilkit::tools::generate::lorem::{generate, LoremOptions, LoremUnit};
///
/// let text = generate(LoremUnit::Words, 5, LoremOptions::default()).unwrap();
/// assert_eq!(text, "lorem ipsum dolor sit amet");
/// ```
pub fn generate(unit: LoremUnit, count: usize, options: LoremOptions) -> ToolResult<String> {
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(ToolError::invalid_option(format!(
            "count {count} is outside 1..={MAX_COUNT}"
        )));
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let text = match unit {
        LoremUnit::Words => words(&mut rng, count).join(" "),
        LoremUnit::Sentences => (0..count)
            .map(|_| sentence(&mut rng))
            .collect::<Vec<_>>()
            .join(" "),
        LoremUnit::Paragraphs => (0..count)
            .map(|_| paragraph(&mut rng))
            .collect::<Vec<_>>()
            .join("\n\n"),
    };

    Ok(if options.start_with_lorem {
        with_classic_opening(&text, unit)
    } else {
        text
    })
}
