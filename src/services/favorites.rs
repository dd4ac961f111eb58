//! Favorite tools.

use anyhow::Result;
use tracing::info;

use crate::catalog::Catalog;
use crate::constants::STORAGE_KEY_FAVORITES;
use crate::tools::ToolError;

use super::KeyValueStore;

/// Ordered set of favorite tool ids stored under the `favorites` key.
#[derive(Debug)]
pub struct FavoritesService {
    store: KeyValueStore,
    ids: Vec<String>,
}

impl FavoritesService {
    /// Loads favorites from `store`, dropping repeated ids.
    pub fn new(store: KeyValueStore) -> Self {
        let mut ids: Vec<String> = Vec::new();
        for id in store
            .get::<Vec<String>>(STORAGE_KEY_FAVORITES)
            .unwrap_or_default()
        {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { store, ids }
    }

    /// Favorite ids in the order they were added.
    pub fn list(&self) -> &[String] {
        &self.ids
    }

    /// True when `id` is a favorite.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    fn check(catalog: &Catalog, id: &str) -> Result<()> {
        if catalog.contains(id) {
            Ok(())
        } else {
            Err(ToolError::invalid_option(format!("Unknown tool id '{id}'")).into())
        }
    }

    fn save(&mut self) -> Result<()> {
        self.store.set(STORAGE_KEY_FAVORITES, &self.ids)
    }

    /// Adds a favorite. Returns false when it already was one.
    pub fn add(&mut self, catalog: &Catalog, id: &str) -> Result<bool> {
        Self::check(catalog, id)?;
        if self.contains(id) {
            return Ok(false);
        }
        self.ids.push(id.to_string());
        self.save()?;
        info!(id, "favorite added");
        Ok(true)
    }

    /// Removes a favorite. Returns false when it was not one.
    pub fn remove(&mut self, catalog: &Catalog, id: &str) -> Result<bool> {
        Self::check(catalog, id)?;
        let before = self.ids.len();
        self.ids.retain(|f| f != id);
        if self.ids.len() == before {
            return Ok(false);
        }
        self.save()?;
        info!(id, "favorite removed");
        Ok(true)
    }

    /// Adds or removes a favorite. Returns whether it is a favorite now.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> Result<bool> {
        if self.contains(id) {
            self.remove(catalog, id)?;
            Ok(false)
        } else {
            self.add(catalog, id)?;
            Ok(true)
        }
    }
}
