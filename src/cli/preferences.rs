//! Theme and language preference commands.

use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::common::{load_config, open_store, print_json, CliError, CliResult};
use crate::services::{PreferencesService, Theme};

fn open_preferences() -> CliResult<PreferencesService> {
    let config = load_config()?;
    let store = open_store(&config)?;
    Ok(PreferencesService::new(store, &config))
}

/// Show or change the theme flag
#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    /// Theme subcommand (show when omitted)
    #[command(subcommand)]
    pub command: Option<ThemeCommand>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Theme subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme
    Show,
    /// Store a theme
    Set {
        /// dark or light
        theme: Theme,
    },
    /// Switch between dark and light
    Toggle,
}

impl ThemeArgs {
    /// Execute the theme command
    pub fn execute(&self) -> CliResult<()> {
        let mut prefs = open_preferences()?;

        match self.command.as_ref().unwrap_or(&ThemeCommand::Show) {
            ThemeCommand::Show => {
                let (theme, source) = prefs.theme();
                if self.json {
                    return print_json(&json!({ "theme": theme, "source": source }));
                }
                println!("{theme} ({source})");
            }
            ThemeCommand::Set { theme } => {
                prefs.set_theme(*theme).map_err(|e| CliError::service(&e))?;
                if self.json {
                    return print_json(&json!({ "theme": theme }));
                }
                println!("Theme set to {theme}.");
            }
            ThemeCommand::Toggle => {
                let theme = prefs.toggle_theme().map_err(|e| CliError::service(&e))?;
                if self.json {
                    return print_json(&json!({ "theme": theme }));
                }
                println!("Theme set to {theme}.");
            }
        }
        Ok(())
    }
}

/// Show or change the UI language
#[derive(Debug, Clone, Args)]
pub struct LanguageArgs {
    /// Language subcommand (show when omitted)
    #[command(subcommand)]
    pub command: Option<LanguageCommand>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Language subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum LanguageCommand {
    /// Print the current language code
    Show,
    /// Store a language code such as `en` or `pt-BR`
    Set {
        /// Language code
        code: String,
    },
}

impl LanguageArgs {
    /// Execute the language command
    pub fn execute(&self) -> CliResult<()> {
        let mut prefs = open_preferences()?;

        match self.command.as_ref().unwrap_or(&LanguageCommand::Show) {
            LanguageCommand::Show => {
                let (code, source) = prefs.language();
                if self.json {
                    return print_json(&json!({ "language": code, "source": source }));
                }
                println!("{code} ({source})");
            }
            LanguageCommand::Set { code } => {
                prefs.set_language(code).map_err(|e| CliError::service(&e))?;
                let (code, _) = prefs.language();
                if self.json {
                    return print_json(&json!({ "language": code }));
                }
                println!("Language set to {code}.");
            }
        }
        Ok(())
    }
}
