//! Password generator with entropy-based strength rating.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::config::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::tools::{ToolError, ToolResult};

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/|~";
/// Characters dropped by [`PasswordOptions::exclude_ambiguous`].
pub const AMBIGUOUS: &str = "0O1lI|";

/// Character sets and length.
#[derive(Debug, Clone, Copy)]
pub struct PasswordOptions {
    /// Number of characters
    pub length: usize,
    /// Include A-Z
    pub uppercase: bool,
    /// Include a-z
    pub lowercase: bool,
    /// Include 0-9
    pub digits: bool,
    /// Include punctuation
    pub symbols: bool,
    /// Leave out look-alike characters
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// The selected character sets, after removing ambiguous characters.
    fn sets(&self) -> Vec<Vec<char>> {
        [
            (self.uppercase, UPPER),
            (self.lowercase, LOWER),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(selected, _)| *selected)
        .map(|(_, set)| {
            set.chars()
                .filter(|c| !(self.exclude_ambiguous && AMBIGUOUS.contains(*c)))
                .collect()
        })
        .collect()
    }

    /// Size of the combined alphabet.
    pub fn pool_size(&self) -> usize {
        self.sets().iter().map(Vec::len).sum()
    }

    /// Entropy in bits of a password drawn from these options.
    pub fn entropy_bits(&self) -> f64 {
        let pool = self.pool_size();
        if pool == 0 {
            return 0.0;
        }
        self.length as f64 * (pool as f64).log2()
    }
}

named_options! {
    /// Rating derived from entropy bits.
    pub enum Strength {
        /// Under 40 bits
        Weak => "weak",
        /// 40 to 60 bits
        Fair => "fair",
        /// 60 to 80 bits
        Strong => "strong",
        /// 80 bits or more
        VeryStrong => "very-strong",
    }
}

/// Rates `bits` of entropy.
pub fn strength(bits: f64) -> Strength {
    if bits < 40.0 {
        Strength::Weak
    } else if bits < 60.0 {
        Strength::Fair
    } else if bits < 80.0 {
        Strength::Strong
    } else {
        Strength::VeryStrong
    }
}

/// A generated password with its rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPassword {
    /// The password
    pub password: String,
    /// Entropy in bits, one decimal
    pub entropy_bits: f64,
    /// Rating of `entropy_bits`
    pub strength: Strength,
}

/// Generates a password containing at least one character from every
/// selected set.
pub fn generate<R: Rng>(options: &PasswordOptions, rng: &mut R) -> ToolResult<GeneratedPassword> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&options.length) {
        return Err(ToolError::invalid_option(format!(
            "length {} is outside {MIN_PASSWORD_LENGTH}..={MAX_PASSWORD_LENGTH}",
            options.length
        )));
    }
    let sets = options.sets();
    if sets.is_empty() {
        return Err(ToolError::invalid_option("select at least one character set"));
    }

    let pool: Vec<char> = sets.iter().flatten().copied().collect();
    let mut chars: Vec<char> = sets
        .iter()
        .filter_map(|set| set.choose(rng).copied())
        .collect();
    while chars.len() < options.length {
        if let Some(&c) = pool.choose(rng) {
            chars.push(c);
        }
    }
    chars.shuffle(rng);

    let bits = options.entropy_bits();
    Ok(GeneratedPassword {
        password: chars.into_iter().collect(),
        entropy_bits: (bits * 10.0).round() / 10.0,
        strength: strength(bits),
    })
}

/// [`generate`] with the thread-local RNG.
pub fn generate_random(options: &PasswordOptions) -> ToolResult<GeneratedPassword> {
    generate(options, &mut rand::thread_rng())
}
