//! Encoding tool commands.

use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::common::{CliResult, InputArgs, OutputArgs};
use crate::services::ContentKind;
use crate::tools::encoding::{
    base64::{self, Base64Mode, Variant},
    hash::{self, HashAlgorithm},
    number_base,
};

/// Base64, hashes and number bases
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Encoding subcommand
    #[command(subcommand)]
    pub command: EncodeCommand,
}

/// Encoding subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum EncodeCommand {
    /// Encode or decode Base64
    Base64(Base64Args),
    /// Compute SHA-2 digests
    Hash(HashArgs),
    /// Convert an integer between bases
    Base(BaseArgs),
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            EncodeCommand::Base64(args) => args.execute(),
            EncodeCommand::Hash(args) => args.execute(),
            EncodeCommand::Base(args) => args.execute(),
        }
    }
}

/// Base64
#[derive(Debug, Clone, Args)]
pub struct Base64Args {
    #[command(flatten)]
    input: InputArgs,

    /// Decode instead of encode
    #[arg(long)]
    decode: bool,

    /// Alphabet: standard or url-safe
    #[arg(long, default_value = "standard")]
    variant: Variant,

    #[command(flatten)]
    output: OutputArgs,
}

impl Base64Args {
    fn execute(&self) -> CliResult<()> {
        let input = self.input.read()?;
        let mode = if self.decode {
            Base64Mode::Decode
        } else {
            Base64Mode::Encode
        };
        let result = base64::apply(&input, mode, self.variant)?;
        self.output.emit(
            &result,
            &json!({ "mode": mode, "variant": self.variant, "result": result }),
            ContentKind::PlainText,
        )
    }
}

/// Hash digests
#[derive(Debug, Clone, Args)]
pub struct HashArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Algorithm: sha256, sha384, sha512 (all of them when omitted)
    #[arg(long)]
    algorithm: Option<HashAlgorithm>,

    /// Upper-case hex
    #[arg(long)]
    uppercase: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl HashArgs {
    fn execute(&self) -> CliResult<()> {
        let input = self.input.read()?;

        if let Some(algorithm) = self.algorithm {
            let hex = hash::digest(&input, algorithm, self.uppercase)?;
            return self.output.emit(
                &hex,
                &json!({ "algorithm": algorithm, "hex": hex }),
                ContentKind::PlainText,
            );
        }

        let digests = hash::digest_all(&input, self.uppercase)?;
        let text = digests
            .iter()
            .map(|d| format!("{:<8} {}", d.algorithm, d.hex))
            .collect::<Vec<_>>()
            .join("\n");
        self.output.emit(&text, &digests, ContentKind::PlainText)
    }
}

/// Number bases
#[derive(Debug, Clone, Args)]
pub struct BaseArgs {
    /// Integer to convert
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    value: String,

    /// Base the number is written in (2-36)
    #[arg(long, default_value_t = 10)]
    from: u32,

    /// Extra target base (2-36)
    #[arg(long)]
    to: Option<u32>,

    #[command(flatten)]
    output: OutputArgs,
}

impl BaseArgs {
    fn execute(&self) -> CliResult<()> {
        let conversion = number_base::convert(&self.value, self.from, self.to)?;

        let mut lines = vec![
            format!("Binary:      {}", conversion.binary),
            format!("Octal:       {}", conversion.octal),
            format!("Decimal:     {}", conversion.decimal),
            format!("Hexadecimal: {}", conversion.hex),
        ];
        if let Some((base, digits)) = &conversion.custom {
            lines.push(format!("Base {base:<7} {digits}"));
        }
        let text = lines.join("\n");
        self.output.emit(&text, &conversion, ContentKind::PlainText)
    }
}
