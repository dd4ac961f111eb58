//! Text tool commands.

use clap::{Args, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use crate::cli::common::{print_json, read_file, CliResult, InputArgs, OutputArgs};
use crate::services::ContentKind;
use crate::tools::require_input;
use crate::tools::text::{
    ascii::{self, CodeBase},
    case::{self, TextCase},
    counter,
    diff,
    duplicates::{self, DedupeOptions, DuplicateMode},
    morse,
    reverse::{self, ReverseMode},
    slug::{self, SlugOptions, DEFAULT_SEPARATOR},
    sort::{self, SortOptions, SortOrder},
    transliterate::{self, Direction},
};

/// Text transformations
#[derive(Debug, Clone, Args)]
pub struct TextArgs {
    /// Text subcommand
    #[command(subcommand)]
    pub command: TextCommand,
}

/// Text subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum TextCommand {
    /// Reverse characters, words or lines
    Reverse(ReverseArgs),
    /// Change letter case or identifier style
    Case(CaseArgs),
    /// Remove duplicate lines
    Dedupe(DedupeArgs),
    /// Count characters, words, sentences and reading time
    Count(CountArgs),
    /// Compare two files line by line
    Diff(DiffArgs),
    /// Sort lines
    Sort(SortArgs),
    /// Make a URL slug
    Slug(SlugArgs),
    /// Transliterate between Arabic and Latin script
    Transliterate(TransliterateArgs),
    /// Encode or decode Morse code
    Morse(MorseArgs),
    /// Convert text to character codes and back
    Ascii(AsciiArgs),
}

impl TextArgs {
    /// Execute the text command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            TextCommand::Reverse(args) => args.execute(),
            TextCommand::Case(args) => args.execute(),
            TextCommand::Dedupe(args) => args.execute(),
            TextCommand::Count(args) => args.execute(),
            TextCommand::Diff(args) => args.execute(),
            TextCommand::Sort(args) => args.execute(),
            TextCommand::Slug(args) => args.execute(),
            TextCommand::Transliterate(args) => args.execute(),
            TextCommand::Morse(args) => args.execute(),
            TextCommand::Ascii(args) => args.execute(),
        }
    }
}

/// Prints a plain text result; `--json` wraps it as `{"result": ...}`
/// next to the options that produced it.
fn emit_result(output: &OutputArgs, result: &str, options: serde_json::Value) -> CliResult<()> {
    let mut body = options;
    body["result"] = json!(result);
    output.emit(result, &body, ContentKind::PlainText)
}

/// Reverse text
#[derive(Debug, Clone, Args)]
pub struct ReverseArgs {
    #[command(flatten)]
    input: InputArgs,

    /// What to reverse: character, word or line
    #[arg(long, default_value = "character")]
    mode: ReverseMode,

    #[command(flatten)]
    output: OutputArgs,
}

impl ReverseArgs {
    fn execute(&self) -> CliResult<()> {
        let text = self.input.read()?;
        let result = reverse::reverse(&text, self.mode)?;
        emit_result(&self.output, &result, json!({ "mode": self.mode }))
    }
}

/// Change case
#[derive(Debug, Clone, Args)]
pub struct CaseArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Target case: upper, lower, title, sentence, camel, pascal, snake,
    /// kebab, constant, alternating, inverse
    #[arg(long, value_name = "CASE")]
    to: TextCase,

    #[command(flatten)]
    output: OutputArgs,
}

impl CaseArgs {
    fn execute(&self) -> CliResult<()> {
        let text = self.input.read()?;
        let result = case::convert_case(&text, self.to)?;
        emit_result(&self.output, &result, json!({ "case": self.to }))
    }
}

/// Remove duplicate lines
#[derive(Debug, Clone, Args)]
pub struct DedupeArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Which occurrences survive: all, consecutive, keep-first, keep-last
    #[arg(long, default_value = "keep-first")]
    mode: DuplicateMode,

    /// Compare lines ignoring case
    #[arg(long)]
    case_insensitive: bool,

    /// Compare lines ignoring surrounding whitespace
    #[arg(long)]
    trim: bool,

    /// Leave blank lines alone
    #[arg(long)]
    ignore_empty: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl DedupeArgs {
    fn execute(&self) -> CliResult<()> {
        let text = self.input.read()?;
        let options = DedupeOptions {
            case_insensitive: self.case_insensitive,
            trim: self.trim,
            ignore_empty: self.ignore_empty,
        };
        let outcome = duplicates::remove_duplicates(&text, self.mode, options)?;
        let result = outcome.text();

        if self.output.json {
            self.output.emit(
                &result,
                &json!({ "mode": self.mode, "lines": outcome.lines, "removed": outcome.removed }),
                ContentKind::PlainText,
            )
        } else {
            println!("{result}");
            eprintln!("Removed {} duplicate line(s).", outcome.removed);
            self.output.deliver(&result, ContentKind::PlainText)
        }
    }
}

/// Text statistics
#[derive(Debug, Clone, Args)]
pub struct CountArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn format_duration(seconds: usize) -> String {
    if seconds < 60 {
        format!("{seconds} sec")
    } else {
        format!("{} min {} sec", seconds / 60, seconds % 60)
    }
}

impl CountArgs {
    fn execute(&self) -> CliResult<()> {
        let text = self.input.read()?;
        let stats = counter::count(require_input(&text, "Text")?);

        if self.json {
            return print_json(&stats);
        }

        println!("Characters:            {}", stats.characters);
        println!("Characters (no space): {}", stats.characters_no_spaces);
        println!("Words:                 {}", stats.words);
        println!("Sentences:             {}", stats.sentences);
        println!("Paragraphs:            {}", stats.paragraphs);
        println!("Lines:                 {}", stats.lines);
        println!("Reading time:          {}", format_duration(stats.reading_seconds));
        println!("Speaking time:         {}", format_duration(stats.speaking_seconds));
        if !stats.top_words.is_empty() {
            println!();
            println!("Top words:");
            for (word, n) in &stats.top_words {
                println!("  {word:<20} {n}");
            }
        }
        Ok(())
    }
}

/// Compare two texts
#[derive(Debug, Clone, Args)]
pub struct DiffArgs {
    /// Original file
    #[arg(value_name = "OLD")]
    old: PathBuf,

    /// Changed file
    #[arg(value_name = "NEW")]
    new: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

impl DiffArgs {
    fn execute(&self) -> CliResult<()> {
        let old = read_file(&self.old)?;
        let new = read_file(&self.new)?;
        let result = diff::diff_lines(&old, &new)?;
        let rendered = result.render();

        if self.output.json {
            self.output.emit(&rendered, &result, ContentKind::PlainText)
        } else {
            println!("{rendered}");
            let stats = result.stats;
            eprintln!(
                "{} added, {} removed, {} unchanged",
                stats.added, stats.removed, stats.unchanged
            );
            self.output.deliver(&rendered, ContentKind::PlainText)
        }
    }
}

/// Sort lines
#[derive(Debug, Clone, Args)]
pub struct SortArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Order: asc, desc, length, numeric, reverse, shuffle
    #[arg(long, default_value = "asc")]
    order: SortOrder,

    /// Ignore case when comparing
    #[arg(long)]
    case_insensitive: bool,

    /// Drop blank lines
    #[arg(long)]
    remove_empty: bool,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    output: OutputArgs,
}

impl SortArgs {
    fn execute(&self) -> CliResult<()> {
        let text = self.input.read()?;
        let options = SortOptions {
            case_insensitive: self.case_insensitive,
            remove_empty: self.remove_empty,
            seed: self.seed,
        };
        let result = sort::sort_lines(&text, self.order, options)?;
        emit_result(&self.output, &result, json!({ "order": self.order }))
    }
}

/// URL slug
#[derive(Debug, Clone, Args)]
pub struct SlugArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Word separator
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Keep the original letter case
    #[arg(long)]
    keep_case: bool,

    /// Maximum slug length
    #[arg(long, value_name = "N")]
    max_length: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,
}

impl SlugArgs {
    fn execute(&self) -> CliResult<()> {
        let text = self.input.read()?;
        let options = SlugOptions {
            separator: self.separator.clone(),
            lowercase: !self.keep_case,
            max_length: self.max_length,
        };
        let result = slug::slugify(&text, &options)?;
        emit_result(&self.output, &result, json!({ "separator": self.separator }))
    }
}

/// Transliterate
#[derive(Debug, Clone, Args)]
pub struct TransliterateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// arabic-to-latin, latin-to-arabic or strip-harakat
    #[arg(long, default_value = "arabic-to-latin")]
    direction: Direction,

    #[command(flatten)]
    output: OutputArgs,
}

impl TransliterateArgs {
    fn execute(&self) -> CliResult<()> {
        let text = self.input.read()?;
        let result = transliterate::transliterate(&text, self.direction)?;
        emit_result(&self.output, &result, json!({ "direction": self.direction }))
    }
}

/// Morse code
#[derive(Debug, Clone, Args)]
pub struct MorseArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Decode Morse code instead of encoding text
    #[arg(long)]
    decode: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl MorseArgs {
    fn execute(&self) -> CliResult<()> {
        let text = self.input.read()?;
        let (result, mode) = if self.decode {
            (morse::decode(&text)?, "decode")
        } else {
            (morse::encode(&text)?, "encode")
        };
        emit_result(&self.output, &result, json!({ "mode": mode }))
    }
}

/// Character codes
#[derive(Debug, Clone, Args)]
pub struct AsciiArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Code base: binary, octal, decimal, hex
    #[arg(long, default_value = "decimal")]
    base: CodeBase,

    /// Turn codes back into text
    #[arg(long)]
    decode: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl AsciiArgs {
    fn execute(&self) -> CliResult<()> {
        let text = self.input.read()?;
        let result = if self.decode {
            ascii::from_codes(&text, self.base)?
        } else {
            ascii::to_codes(&text, self.base)?
        };
        emit_result(&self.output, &result, json!({ "base": self.base }))
    }
}
