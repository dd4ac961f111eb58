//! Tool metadata shown in the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Implementing unit behind a catalog entry.
///
/// Every catalog descriptor must resolve to one of these variants; an id
/// without a variant is rejected when the catalog loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolKind {
    /// Reverse characters, words or lines
    TextReverser,
    /// Convert letter case and identifier styles
    CaseConverter,
    /// Remove duplicate lines
    DuplicateRemover,
    /// Count words, characters, sentences
    WordCounter,
    /// Line-level text comparison
    TextDiff,
    /// Sort lines
    LineSorter,
    /// URL slug generation
    SlugGenerator,
    /// Arabic/Latin transliteration
    Transliterator,
    /// Morse code encode/decode
    MorseCode,
    /// Text to character codes and back
    AsciiConverter,
    /// Base64 encode/decode
    Base64,
    /// SHA-2 digests
    HashGenerator,
    /// Number base conversion
    NumberBaseConverter,
    /// Color format conversion
    ColorConverter,
    /// Color harmony palettes
    PaletteGenerator,
    /// CSS gradients
    GradientGenerator,
    /// Dominant colors of an image
    ColorExtractor,
    /// Color vision deficiency simulation
    ColorBlindnessSimulator,
    /// WCAG contrast ratio
    ContrastChecker,
    /// Temperature scales
    TemperatureConverter,
    /// Length, mass, volume and other units
    UnitConverter,
    /// Unix timestamps and dates
    TimestampConverter,
    /// Body mass index
    BmiCalculator,
    /// Percentages
    PercentageCalculator,
    /// Age from a birth date
    AgeCalculator,
    /// Tip splitting
    TipCalculator,
    /// Loan amortization
    LoanCalculator,
    /// Placeholder text
    LoremIpsum,
    /// Random passwords
    PasswordGenerator,
    /// Random UUIDs
    UuidGenerator,
    /// Pomodoro timer
    PomodoroTimer,
    /// Persistent to-do list
    TodoList,
}

impl ToolKind {
    /// Every tool kind in catalog order.
    pub const ALL: [Self; 32] = [
        Self::TextReverser,
        Self::CaseConverter,
        Self::DuplicateRemover,
        Self::WordCounter,
        Self::TextDiff,
        Self::LineSorter,
        Self::SlugGenerator,
        Self::Transliterator,
        Self::MorseCode,
        Self::AsciiConverter,
        Self::Base64,
        Self::HashGenerator,
        Self::NumberBaseConverter,
        Self::ColorConverter,
        Self::PaletteGenerator,
        Self::GradientGenerator,
        Self::ColorExtractor,
        Self::ColorBlindnessSimulator,
        Self::ContrastChecker,
        Self::TemperatureConverter,
        Self::UnitConverter,
        Self::TimestampConverter,
        Self::BmiCalculator,
        Self::PercentageCalculator,
        Self::AgeCalculator,
        Self::TipCalculator,
        Self::LoanCalculator,
        Self::LoremIpsum,
        Self::PasswordGenerator,
        Self::UuidGenerator,
        Self::PomodoroTimer,
        Self::TodoList,
    ];

    /// Stable catalog id (kebab-case).
    pub const fn id(self) -> &'static str {
        match self {
            Self::TextReverser => "text-reverser",
            Self::CaseConverter => "case-converter",
            Self::DuplicateRemover => "duplicate-remover",
            Self::WordCounter => "word-counter",
            Self::TextDiff => "text-diff",
            Self::LineSorter => "line-sorter",
            Self::SlugGenerator => "slug-generator",
            Self::Transliterator => "transliterator",
            Self::MorseCode => "morse-code",
            Self::AsciiConverter => "ascii-converter",
            Self::Base64 => "base64",
            Self::HashGenerator => "hash-generator",
            Self::NumberBaseConverter => "number-base-converter",
            Self::ColorConverter => "color-converter",
            Self::PaletteGenerator => "palette-generator",
            Self::GradientGenerator => "gradient-generator",
            Self::ColorExtractor => "color-extractor",
            Self::ColorBlindnessSimulator => "color-blindness-simulator",
            Self::ContrastChecker => "contrast-checker",
            Self::TemperatureConverter => "temperature-converter",
            Self::UnitConverter => "unit-converter",
            Self::TimestampConverter => "timestamp-converter",
            Self::BmiCalculator => "bmi-calculator",
            Self::PercentageCalculator => "percentage-calculator",
            Self::AgeCalculator => "age-calculator",
            Self::TipCalculator => "tip-calculator",
            Self::LoanCalculator => "loan-calculator",
            Self::LoremIpsum => "lorem-ipsum",
            Self::PasswordGenerator => "password-generator",
            Self::UuidGenerator => "uuid-generator",
            Self::PomodoroTimer => "pomodoro-timer",
            Self::TodoList => "todo-list",
        }
    }

    /// Command line that opens the tool.
    pub const fn command(self) -> &'static str {
        match self {
            Self::TextReverser => "text reverse",
            Self::CaseConverter => "text case",
            Self::DuplicateRemover => "text dedupe",
            Self::WordCounter => "text count",
            Self::TextDiff => "text diff",
            Self::LineSorter => "text sort",
            Self::SlugGenerator => "text slug",
            Self::Transliterator => "text transliterate",
            Self::MorseCode => "text morse",
            Self::AsciiConverter => "text ascii",
            Self::Base64 => "encode base64",
            Self::HashGenerator => "encode hash",
            Self::NumberBaseConverter => "encode base",
            Self::ColorConverter => "color convert",
            Self::PaletteGenerator => "color palette",
            Self::GradientGenerator => "color gradient",
            Self::ColorExtractor => "color extract",
            Self::ColorBlindnessSimulator => "color blindness",
            Self::ContrastChecker => "color contrast",
            Self::TemperatureConverter => "convert temperature",
            Self::UnitConverter => "convert unit",
            Self::TimestampConverter => "convert timestamp",
            Self::BmiCalculator => "calc bmi",
            Self::PercentageCalculator => "calc percent",
            Self::AgeCalculator => "calc age",
            Self::TipCalculator => "calc tip",
            Self::LoanCalculator => "calc loan",
            Self::LoremIpsum => "generate lorem",
            Self::PasswordGenerator => "generate password",
            Self::UuidGenerator => "generate uuid",
            Self::PomodoroTimer => "pomodoro",
            Self::TodoList => "todo",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("No implementation for tool id '{s}'"))
    }
}

/// Group of related tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
    /// Category ID (e.g., "text", "color")
    pub id: String,
    /// Display name (e.g., "Text Tools")
    pub name: String,
    /// What the tools in this category do
    pub description: String,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    /// Stable id (kebab-case)
    pub id: String,
    /// Display name
    pub name: String,
    /// Category ID
    pub category: String,
    /// Icon glyph shown next to the name
    pub icon: String,
    /// One-line description
    pub description: String,
    /// Extra search terms
    pub keywords: Vec<String>,
    /// Implementing unit
    #[serde(skip)]
    pub kind: ToolKind,
}
