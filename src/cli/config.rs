//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Directory holding the persisted store
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme_mode: Option<String>,

    /// Default UI language code
    #[arg(long, value_name = "CODE")]
    language: Option<String>,

    /// Default generated password length
    #[arg(long, value_name = "N")]
    password_length: Option<usize>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    config_file: String,
    data_dir: String,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                println!("{}", config_file()?.display());
                Ok(())
            }
        }
    }
}

fn config_file() -> CliResult<PathBuf> {
    Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let data_dir = config
            .data_dir()
            .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;

        if self.json {
            return print_json(&ConfigOutput {
                config_file: config_file()?.display().to_string(),
                data_dir: data_dir.display().to_string(),
                config: &config,
            });
        }

        output_human_readable(&config, &data_dir);
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.data_dir.is_none()
            && self.theme_mode.is_none()
            && self.language.is_none()
            && self.password_length.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-dir, --theme-mode, --language, or --password-length",
            ));
        }

        let mut config = load_config()?;

        if let Some(path) = &self.data_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create data directory {}: {e}",
                    path.display()
                ))
            })?;
            config.paths.data_dir = Some(path.clone());
        }

        if let Some(mode) = &self.theme_mode {
            config.ui.theme_mode = ThemeMode::parse(mode).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(language) = &self.language {
            config.ui.language = language.trim().to_string();
        }

        if let Some(length) = self.password_length {
            config.tools.password_length = length;
        }

        // bad values are user errors, not IO failures
        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, data_dir: &std::path::Path) {
    println!("utilkit Configuration");
    println!("=====================");
    println!();

    println!("Paths:");
    println!("  Data Directory: {}", data_dir.display());
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!("  Language:   {}", config.ui.language);
    println!();

    let tools = &config.tools;
    println!("Tools:");
    println!("  Password Length:  {}", tools.password_length);
    println!("  Lorem Paragraphs: {}", tools.lorem_paragraphs);
    println!("  Palette Size:     {}", tools.palette_size);
    println!(
        "  Pomodoro:         {}/{}/{} min, long break every {} sessions",
        tools.pomodoro.work_minutes,
        tools.pomodoro.short_break_minutes,
        tools.pomodoro.long_break_minutes,
        tools.pomodoro.sessions_before_long_break
    );
}
