//! utilkit - everyday text, color, conversion and productivity tools
//!
//! Each tool from the catalog is a subcommand. Run `utilkit tools list` to
//! browse them.

use clap::{Parser, Subcommand};
use tracing::debug;

use utilkit::cli::{
    CalcArgs, CliResult, ColorArgs, ConfigArgs, ConvertArgs, EncodeArgs, ExitCode, FavoritesArgs,
    GenerateArgs, LanguageArgs, PomodoroArgs, TextArgs, ThemeArgs, TodoArgs, ToolsArgs,
};
use utilkit::logging;

/// utilkit - everyday text, color, conversion and productivity tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse and search the tool catalog
    Tools(ToolsArgs),
    /// Text transformations
    Text(TextArgs),
    /// Base64, hashes and number bases
    Encode(EncodeArgs),
    /// Color conversion, palettes, gradients and accessibility
    Color(ColorArgs),
    /// Temperature, unit and timestamp conversion
    Convert(ConvertArgs),
    /// BMI, percentage, age, tip and loan calculators
    Calc(CalcArgs),
    /// Lorem ipsum, passwords and UUIDs
    Generate(GenerateArgs),
    /// Manage the persistent to-do list
    Todo(TodoArgs),
    /// Manage favorite tools
    Favorites(FavoritesArgs),
    /// Show or change the theme flag
    Theme(ThemeArgs),
    /// Show or change the UI language
    Language(LanguageArgs),
    /// Pomodoro timer
    Pomodoro(PomodoroArgs),
    /// Configuration management
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Tools(args) => args.execute(),
            Self::Text(args) => args.execute(),
            Self::Encode(args) => args.execute(),
            Self::Color(args) => args.execute(),
            Self::Convert(args) => args.execute(),
            Self::Calc(args) => args.execute(),
            Self::Generate(args) => args.execute(),
            Self::Todo(args) => args.execute(),
            Self::Favorites(args) => args.execute(),
            Self::Theme(args) => args.execute(),
            Self::Language(args) => args.execute(),
            Self::Pomodoro(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!(command = ?cli.command, "dispatching");

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
    std::process::exit(ExitCode::Success.code());
}
