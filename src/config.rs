//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::constants::CONFIG_DIR_ENV;

/// Smallest password length the generator accepts.
pub const MIN_PASSWORD_LENGTH: usize = 4;
/// Largest password length the generator accepts.
pub const MAX_PASSWORD_LENGTH: usize = 128;
/// Smallest palette the palette generator produces.
pub const MIN_PALETTE_SIZE: usize = 2;
/// Largest palette the palette generator produces.
pub const MAX_PALETTE_SIZE: usize = 12;
/// Longest Pomodoro phase in minutes.
pub const MAX_POMODORO_MINUTES: u32 = 24 * 60;
/// Most work sessions in one Pomodoro run, and the longest long-break interval.
pub const MAX_POMODORO_CYCLES: u32 = 100;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses a theme mode from user input (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Lowercase name used in CLI output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding `storage.json` (defaults to `<config_dir>/data`)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme used until a theme flag has been persisted
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Language used until a language has been persisted
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            language: default_language(),
        }
    }
}

/// Pomodoro durations. Missing keys take their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroConfig {
    /// Length of a work session in minutes
    pub work_minutes: u32,
    /// Length of a short break in minutes
    pub short_break_minutes: u32,
    /// Length of a long break in minutes
    pub long_break_minutes: u32,
    /// Number of work sessions before a long break
    pub sessions_before_long_break: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions_before_long_break: 4,
        }
    }
}

impl PomodoroConfig {
    /// Checks durations against 1..=[`MAX_POMODORO_MINUTES`] and the session
    /// count against 1..=[`MAX_POMODORO_CYCLES`].
    pub fn validate(&self) -> Result<()> {
        let minutes = [
            ("work", self.work_minutes),
            ("short break", self.short_break_minutes),
            ("long break", self.long_break_minutes),
        ];
        for (name, value) in minutes {
            if !(1..=MAX_POMODORO_MINUTES).contains(&value) {
                anyhow::bail!(
                    "Pomodoro {name} length must be between 1 and {MAX_POMODORO_MINUTES} minutes, got {value}"
                );
            }
        }
        if !(1..=MAX_POMODORO_CYCLES).contains(&self.sessions_before_long_break) {
            anyhow::bail!(
                "Pomodoro sessions before a long break must be between 1 and {MAX_POMODORO_CYCLES}, got {}",
                self.sessions_before_long_break
            );
        }
        Ok(())
    }
}

/// Default values for tool options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefaults {
    /// Default generated password length
    #[serde(default = "default_password_length")]
    pub password_length: usize,
    /// Default number of Lorem Ipsum paragraphs
    #[serde(default = "default_lorem_paragraphs")]
    pub lorem_paragraphs: usize,
    /// Default number of colors in a generated palette
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,
    /// Pomodoro timer durations
    #[serde(default)]
    pub pomodoro: PomodoroConfig,
}

const fn default_password_length() -> usize {
    16
}

const fn default_lorem_paragraphs() -> usize {
    3
}

const fn default_palette_size() -> usize {
    5
}

impl Default for ToolDefaults {
    fn default() -> Self {
        Self {
            password_length: default_password_length(),
            lorem_paragraphs: default_lorem_paragraphs(),
            palette_size: default_palette_size(),
            pomodoro: PomodoroConfig::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$UTILKIT_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/utilkit/config.toml`
/// - macOS: `~/Library/Application Support/utilkit/config.toml`
/// - Windows: `%APPDATA%\utilkit\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Tool defaults
    #[serde(default)]
    pub tools: ToolDefaults,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honoring `UTILKIT_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("utilkit");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory holding the persisted key-value store.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.paths.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("data")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path (temp file + rename).
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let tools = &self.tools;

        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&tools.password_length) {
            anyhow::bail!(
                "Password length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}, got {}",
                tools.password_length
            );
        }

        if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&tools.palette_size) {
            anyhow::bail!(
                "Palette size must be between {MIN_PALETTE_SIZE} and {MAX_PALETTE_SIZE}, got {}",
                tools.palette_size
            );
        }

        if tools.lorem_paragraphs == 0 {
            anyhow::bail!("Lorem Ipsum paragraph count must be at least 1");
        }

        tools.pomodoro.validate()?;

        if !is_valid_language_code(&self.ui.language) {
            anyhow::bail!(
                "Invalid language code '{}'. Expected e.g. 'en' or 'pt-BR'",
                self.ui.language
            );
        }

        Ok(())
    }
}

/// Checks a UI language code of the form `ll` or `ll-RR`.
pub fn is_valid_language_code(code: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[a-z]{2,3}(-[A-Z]{2})?$").expect("language pattern is valid"))
        .is_match(code)
}
