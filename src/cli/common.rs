//! Shared CLI plumbing: errors, exit codes, input and output handling.

use clap::Args;
use serde::Serialize;
use std::fmt;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::services::{clipboard, export, ContentKind, KeyValueStore};
use crate::tools::ToolError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input or options
    Validation = 1,
    /// File system, clipboard or storage failure
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error category, decides the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid user input
    Validation,
    /// IO failure
    Io,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Category
    pub kind: CliErrorKind,
    /// Message printed after `Error: `
    pub message: String,
}

impl CliError {
    /// Invalid input or options.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// File system or environment failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Maps a service error: a [`ToolError`] inside is a validation error,
    /// anything else is IO.
    pub fn service(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ToolError>() {
            Some(tool_error) => Self::from(tool_error.clone()),
            None => Self::io(format!("{error:#}")),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::Validation,
            CliErrorKind::Io => ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ToolError> for CliError {
    fn from(error: ToolError) -> Self {
        Self::validation(error.to_string())
    }
}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Text input: positional argument, `--file`, or stdin, in that order.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input text (reads --file or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the input from a file
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Reads the input text.
    pub fn read(&self) -> CliResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return read_file(path);
        }
        read_stdin()
    }
}

/// Reads a UTF-8 text file.
pub fn read_file(path: &Path) -> CliResult<String> {
    debug!(path = %path.display(), "reading input file");
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))
}

/// Reads all of stdin, refusing to wait on an interactive terminal.
pub fn read_stdin() -> CliResult<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::validation(
            "No input given. Pass TEXT, --file FILE, or pipe text on stdin",
        ));
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
    // a trailing newline from `echo` is not part of the input
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

/// Result delivery: stdout text or JSON, plus optional clipboard and file.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Also save the result to a file
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Prints `text` (or `json` with `--json`), then copies and saves `text`
    /// as requested.
    pub fn emit<T: Serialize + ?Sized>(
        &self,
        text: &str,
        json: &T,
        kind: ContentKind,
    ) -> CliResult<()> {
        if self.json {
            print_json(json)?;
        } else {
            println!("{text}");
        }
        self.deliver(text, kind)
    }

    /// Copies and saves `text` without printing it.
    pub fn deliver(&self, text: &str, kind: ContentKind) -> CliResult<()> {
        if self.copy {
            match clipboard::copy_text(text) {
                Ok(()) => eprintln!("Copied to clipboard."),
                Err(e) => eprintln!("Warning: {e:#}"),
            }
        }
        if let Some(path) = &self.output {
            let saved = export::save(path, text, kind).map_err(|e| CliError::service(&e))?;
            eprintln!("Saved to {}", saved.display());
        }
        Ok(())
    }
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Loads the configuration file.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Opens the key-value store in the configured data directory.
pub fn open_store(config: &Config) -> CliResult<KeyValueStore> {
    let dir = config
        .data_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;
    KeyValueStore::open(&dir).map_err(|e| CliError::service(&e))
}
