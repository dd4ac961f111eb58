//! CLI command handlers for utilkit.
//!
//! Every catalog tool is reachable as a subcommand; results go to stdout as
//! text or `--json`, diagnostics and warnings go to stderr.

pub mod calc;
pub mod color;
pub mod common;
pub mod config;
pub mod convert;
pub mod encode;
pub mod favorites;
pub mod generate;
pub mod pomodoro;
pub mod preferences;
pub mod text;
pub mod todo;
pub mod tools;

// Re-export types used by main.rs and tests
pub use calc::CalcArgs;
pub use color::ColorArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use encode::EncodeArgs;
pub use favorites::FavoritesArgs;
pub use generate::GenerateArgs;
pub use pomodoro::PomodoroArgs;
pub use preferences::{LanguageArgs, ThemeArgs};
pub use text::TextArgs;
pub use todo::TodoArgs;
pub use tools::ToolsArgs;
