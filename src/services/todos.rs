//! Persistent to-do list.

use anyhow::{Context, Result};
use tracing::info;
use uuid::Uuid;

use crate::constants::STORAGE_KEY_TODOS;
use crate::models::{NewTodo, TodoEdit, TodoItem, TodoList};

use super::KeyValueStore;

/// To-do list backed by the key-value store.
///
/// The list is loaded once from the `todos` key and saved after every
/// successful mutation. A rejected change returns the
/// [`ToolError`](crate::tools::ToolError) and leaves both the list and the
/// store unchanged.
#[derive(Debug)]
pub struct TodoService {
    store: KeyValueStore,
    list: TodoList,
}

impl TodoService {
    /// Loads the list from `store`.
    pub fn new(store: KeyValueStore) -> Self {
        let list = store
            .get::<Vec<TodoItem>>(STORAGE_KEY_TODOS)
            .map(TodoList::from_items)
            .unwrap_or_default();
        Self { store, list }
    }

    /// The loaded list.
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    fn save(&mut self) -> Result<()> {
        self.store.set(STORAGE_KEY_TODOS, &self.list)
    }

    fn item(&self, id: Uuid) -> Result<TodoItem> {
        self.list
            .get(id)
            .cloned()
            .with_context(|| format!("No to-do with id '{id}'"))
    }

    /// Adds an item.
    pub fn add(&mut self, new: NewTodo) -> Result<TodoItem> {
        let item = self.list.add(new)?.clone();
        self.save()?;
        info!(id = %item.id, "to-do added");
        Ok(item)
    }

    /// Flips the completed flag of an item given by id or unique prefix.
    pub fn toggle(&mut self, id_or_prefix: &str) -> Result<TodoItem> {
        let id = self.list.find(id_or_prefix)?;
        self.list.toggle(id)?;
        self.save()?;
        info!(%id, "to-do toggled");
        self.item(id)
    }

    /// Edits an item given by id or unique prefix.
    pub fn edit(&mut self, id_or_prefix: &str, edit: TodoEdit) -> Result<TodoItem> {
        let id = self.list.find(id_or_prefix)?;
        self.list.edit(id, edit)?;
        self.save()?;
        info!(%id, "to-do edited");
        self.item(id)
    }

    /// Deletes an item given by id or unique prefix and returns it.
    pub fn delete(&mut self, id_or_prefix: &str) -> Result<TodoItem> {
        let id = self.list.find(id_or_prefix)?;
        let item = self.list.delete(id)?;
        self.save()?;
        info!(%id, "to-do deleted");
        Ok(item)
    }

    /// Removes completed items and returns how many went.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let removed = self.list.clear_completed();
        if removed > 0 {
            self.save()?;
            info!(removed, "completed to-dos cleared");
        }
        Ok(removed)
    }
}
