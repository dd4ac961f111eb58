//! Generator commands: placeholder text, passwords and UUIDs.

use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::common::{load_config, CliResult, OutputArgs};
use crate::services::ContentKind;
use crate::tools::generate::{
    lorem::{self, LoremOptions, LoremUnit},
    password::{self, PasswordOptions},
    uuid::{self, UuidOptions},
};

/// Lorem ipsum, passwords and UUIDs
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Generator subcommand
    #[command(subcommand)]
    pub command: GenerateCommand,
}

/// Generator subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum GenerateCommand {
    /// Placeholder text
    Lorem(LoremArgs),
    /// Random password with a strength rating
    Password(PasswordArgs),
    /// Random v4 UUIDs
    Uuid(UuidArgs),
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            GenerateCommand::Lorem(args) => args.execute(),
            GenerateCommand::Password(args) => args.execute(),
            GenerateCommand::Uuid(args) => args.execute(),
        }
    }
}

/// Lorem ipsum
#[derive(Debug, Clone, Args)]
pub struct LoremArgs {
    /// How many units (defaults to the configured paragraph count)
    #[arg(value_name = "COUNT")]
    count: Option<usize>,

    /// paragraphs, sentences or words
    #[arg(long, default_value = "paragraphs")]
    unit: LoremUnit,

    /// Do not open with "Lorem ipsum dolor sit amet"
    #[arg(long)]
    random_start: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    output: OutputArgs,
}

impl LoremArgs {
    fn execute(&self) -> CliResult<()> {
        let count = match self.count {
            Some(count) => count,
            None => load_config()?.tools.lorem_paragraphs,
        };
        let options = LoremOptions {
            start_with_lorem: !self.random_start,
            seed: self.seed,
        };
        let text = lorem::generate(self.unit, count, options)?;
        self.output.emit(
            &text,
            &json!({ "unit": self.unit, "count": count, "text": text }),
            ContentKind::PlainText,
        )
    }
}

/// Password
#[derive(Debug, Clone, Args)]
pub struct PasswordArgs {
    /// Number of characters (defaults to the configured length)
    #[arg(long)]
    length: Option<usize>,

    /// Leave out A-Z
    #[arg(long)]
    no_uppercase: bool,

    /// Leave out a-z
    #[arg(long)]
    no_lowercase: bool,

    /// Leave out 0-9
    #[arg(long)]
    no_digits: bool,

    /// Leave out punctuation
    #[arg(long)]
    no_symbols: bool,

    /// Leave out look-alike characters such as 0/O and 1/l
    #[arg(long)]
    exclude_ambiguous: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl PasswordArgs {
    fn execute(&self) -> CliResult<()> {
        let length = match self.length {
            Some(length) => length,
            None => load_config()?.tools.password_length,
        };
        let options = PasswordOptions {
            length,
            uppercase: !self.no_uppercase,
            lowercase: !self.no_lowercase,
            digits: !self.no_digits,
            symbols: !self.no_symbols,
            exclude_ambiguous: self.exclude_ambiguous,
        };
        let generated = password::generate_random(&options)?;

        if self.output.json {
            return self
                .output
                .emit(&generated.password, &generated, ContentKind::PlainText);
        }
        println!("{}", generated.password);
        eprintln!(
            "Strength: {} ({:.1} bits)",
            generated.strength, generated.entropy_bits
        );
        self.output
            .deliver(&generated.password, ContentKind::PlainText)
    }
}

/// UUIDs
#[derive(Debug, Clone, Args)]
pub struct UuidArgs {
    /// How many UUIDs
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Upper-case hex digits
    #[arg(long)]
    uppercase: bool,

    /// Leave out the hyphens
    #[arg(long)]
    no_hyphens: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl UuidArgs {
    fn execute(&self) -> CliResult<()> {
        let options = UuidOptions {
            uppercase: self.uppercase,
            no_hyphens: self.no_hyphens,
        };
        let ids = uuid::generate(self.count, options)?;
        self.output
            .emit(&ids.join("\n"), &ids, ContentKind::PlainText)
    }
}
