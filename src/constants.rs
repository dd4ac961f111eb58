//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the keys used in persisted storage.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "utilkit";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "utilkit";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "UTILKIT_CONFIG_DIR";

/// Storage key holding the to-do list (JSON array of items).
pub const STORAGE_KEY_TODOS: &str = "todos";

/// Storage key holding favorite tool ids (JSON array of strings).
pub const STORAGE_KEY_FAVORITES: &str = "favorites";

/// Storage key holding the theme flag ("dark" or "light").
pub const STORAGE_KEY_THEME: &str = "theme";

/// Storage key holding the selected UI language code.
pub const STORAGE_KEY_LANGUAGE: &str = "language";
