//! Service layer for side effects.
//!
//! Persisted state (to-dos, favorites, theme, language) lives in one
//! [`KeyValueStore`]; clipboard, file export and PNG IO are thin wrappers
//! over their crates. Everything here reports failures as `anyhow` errors.

pub mod clipboard;
pub mod export;
pub mod favorites;
pub mod image;
pub mod preferences;
pub mod store;
pub mod todos;

pub use export::ContentKind;
pub use favorites::FavoritesService;
pub use preferences::{PreferencesService, Theme};
pub use store::KeyValueStore;
pub use todos::TodoService;
