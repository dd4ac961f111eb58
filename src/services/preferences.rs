//! Theme flag and UI language.

use anyhow::Result;
use tracing::{debug, info};

use crate::config::{is_valid_language_code, Config, ThemeMode};
use crate::constants::{STORAGE_KEY_LANGUAGE, STORAGE_KEY_THEME};
use crate::tools::ToolError;

use super::KeyValueStore;

named_options! {
    /// Persisted theme flag.
    pub enum Theme {
        /// Dark background
        Dark => "dark",
        /// Light background
        Light => "light",
    }
}

impl Theme {
    /// The other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Asks the operating system. Falls back to dark when undetectable.
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::Light,
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::Dark,
        }
    }
}

named_options! {
    /// Where a preference value came from.
    pub enum Source {
        /// Persisted in the key-value store
        Stored => "stored",
        /// Taken from the configuration file
        Config => "config",
        /// Detected from the operating system
        System => "system",
    }
}

/// Theme and language preferences.
///
/// Stored values win; otherwise the configuration supplies the default.
#[derive(Debug)]
pub struct PreferencesService {
    store: KeyValueStore,
    theme_mode: ThemeMode,
    default_language: String,
}

impl PreferencesService {
    /// Creates the service over `store` with defaults from `config`.
    pub fn new(store: KeyValueStore, config: &Config) -> Self {
        Self {
            store,
            theme_mode: config.ui.theme_mode,
            default_language: config.ui.language.clone(),
        }
    }

    fn stored_theme(&self) -> Option<Theme> {
        let value = self.store.get::<String>(STORAGE_KEY_THEME)?;
        match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                debug!(error = %e, "ignoring stored theme");
                None
            }
        }
    }

    /// Current theme and where it came from.
    pub fn theme(&self) -> (Theme, Source) {
        if let Some(theme) = self.stored_theme() {
            return (theme, Source::Stored);
        }
        match self.theme_mode {
            ThemeMode::Dark => (Theme::Dark, Source::Config),
            ThemeMode::Light => (Theme::Light, Source::Config),
            ThemeMode::Auto => (Theme::detect(), Source::System),
        }
    }

    /// Persists a theme.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.set(STORAGE_KEY_THEME, theme.as_str())?;
        info!(theme = %theme, "theme saved");
        Ok(())
    }

    /// Flips and persists the current theme. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.theme().0.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Current language code and where it came from.
    pub fn language(&self) -> (String, Source) {
        match self.store.get::<String>(STORAGE_KEY_LANGUAGE) {
            Some(code) if is_valid_language_code(&code) => (code, Source::Stored),
            _ => (self.default_language.clone(), Source::Config),
        }
    }

    /// Persists a language code such as `en` or `pt-BR`.
    pub fn set_language(&mut self, code: &str) -> Result<()> {
        let code = code.trim();
        if !is_valid_language_code(code) {
            return Err(ToolError::invalid_option(format!(
                "Invalid language code '{code}'. Expected e.g. 'en' or 'pt-BR'"
            ))
            .into());
        }
        self.store.set(STORAGE_KEY_LANGUAGE, code)?;
        info!(language = code, "language saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(dir: &TempDir, mode: ThemeMode) -> PreferencesService {
        let mut config = Config::new();
        config.ui.theme_mode = mode;
        PreferencesService::new(KeyValueStore::open(dir.path()).unwrap(), &config)
    }

    #[test]
    fn test_theme_falls_back_to_config() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            service(&dir, ThemeMode::Light).theme(),
            (Theme::Light, Source::Config)
        );
    }

    #[test]
    fn test_stored_theme_wins_and_toggles() {
        let dir = TempDir::new().unwrap();
        let mut prefs = service(&dir, ThemeMode::Light);
        prefs.set_theme(Theme::Dark).unwrap();
        assert_eq!(prefs.theme(), (Theme::Dark, Source::Stored));

        assert_eq!(prefs.toggle_theme().unwrap(), Theme::Light);
        let reopened = service(&dir, ThemeMode::Dark);
        assert_eq!(reopened.theme(), (Theme::Light, Source::Stored));
    }

    #[test]
    fn test_theme_stored_as_plain_string() {
        let dir = TempDir::new().unwrap();
        service(&dir, ThemeMode::Auto).set_theme(Theme::Light).unwrap();
        let store = KeyValueStore::open(dir.path()).unwrap();
        assert_eq!(store.get::<String>("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_language() {
        let dir = TempDir::new().unwrap();
        let mut prefs = service(&dir, ThemeMode::Dark);
        assert_eq!(prefs.language(), ("en".to_string(), Source::Config));

        prefs.set_language("pt-BR").unwrap();
        assert_eq!(prefs.language(), ("pt-BR".to_string(), Source::Stored));

        assert!(prefs.set_language("Portuguese").is_err());
        assert_eq!(prefs.language().0, "pt-BR");
    }
}
