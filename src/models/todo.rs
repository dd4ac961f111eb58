//! To-do items and the in-memory list they live in.
//!
//! `TodoList` owns every mutation; persistence is handled separately by
//! [`crate::services::TodoService`], which saves the list after each change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::tools::{ToolError, ToolResult};

/// Shortest id prefix accepted by [`TodoList::find`].
pub const MIN_ID_PREFIX: usize = 4;

/// Default category for new items.
pub const DEFAULT_CATEGORY: &str = "general";

/// Priority of a to-do item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    #[default]
    Medium,
    /// High priority
    High,
}

impl Priority {
    /// Parses a priority name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown priority '{s}', expected low, medium or high"))
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: Uuid,
    /// Task description
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Free-form category
    #[serde(default = "default_category")]
    pub category: String,
    /// Optional due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl TodoItem {
    /// True when the item is open and its due date lies before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }
}

/// Fields for a new to-do item.
#[derive(Debug, Clone, Default)]
pub struct NewTodo {
    /// Task description (required)
    pub text: String,
    /// Priority (defaults to medium)
    pub priority: Priority,
    /// Category (defaults to "general" when blank)
    pub category: Option<String>,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
}

/// Partial update for an existing item. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoEdit {
    /// New description
    pub text: Option<String>,
    /// New priority
    pub priority: Option<Priority>,
    /// New category
    pub category: Option<String>,
    /// New due date; `Some(None)` clears it
    pub due_date: Option<Option<NaiveDate>>,
}

named_options! {
    /// Completion filter for listing.
    #[derive(Default)]
    pub enum TodoFilter {
        /// Every item
        #[default]
        All => "all",
        /// Open items only
        Active => "active",
        /// Finished items only
        Completed => "completed",
    }
}

named_options! {
    /// Sort order for listing.
    #[derive(Default)]
    pub enum TodoSort {
        /// Oldest first
        #[default]
        Created => "created",
        /// Earliest due date first, undated last
        Due => "due",
        /// High priority first
        Priority => "priority",
        /// Alphabetical by text
        Text => "text",
    }
}

/// Counters shown alongside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoStats {
    /// All items
    pub total: usize,
    /// Open items
    pub active: usize,
    /// Finished items
    pub completed: usize,
    /// Open items past their due date
    pub overdue: usize,
}

/// Ordered collection of to-do items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-loaded items.
    pub fn from_items(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an item created now.
    pub fn add(&mut self, new: NewTodo) -> ToolResult<&TodoItem> {
        self.add_at(new, Utc::now())
    }

    /// Adds an item with an explicit creation time.
    pub fn add_at(&mut self, new: NewTodo, created_at: DateTime<Utc>) -> ToolResult<&TodoItem> {
        let text = new.text.trim();
        if text.is_empty() {
            return Err(ToolError::EmptyInput { field: "To-do text" });
        }

        let category = new
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(default_category);

        self.items.push(TodoItem {
            id: Uuid::new_v4(),
            text: text.to_string(),
            completed: false,
            priority: new.priority,
            category,
            due_date: new.due_date,
            created_at,
        });

        Ok(&self.items[self.items.len() - 1])
    }

    /// Resolves a full id or a unique prefix of at least [`MIN_ID_PREFIX`] characters.
    pub fn find(&self, id_or_prefix: &str) -> ToolResult<Uuid> {
        let needle = id_or_prefix.trim().to_lowercase();

        if let Ok(id) = Uuid::parse_str(&needle) {
            return self
                .items
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.id)
                .ok_or_else(|| ToolError::invalid_option(format!("No to-do with id '{needle}'")));
        }

        if needle.len() < MIN_ID_PREFIX {
            return Err(ToolError::invalid_option(format!(
                "To-do id prefix '{needle}' is too short (minimum {MIN_ID_PREFIX} characters)"
            )));
        }

        let mut matches = self
            .items
            .iter()
            .filter(|item| item.id.to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item.id),
            (None, _) => Err(ToolError::invalid_option(format!(
                "No to-do with id '{needle}'"
            ))),
            (Some(_), Some(_)) => Err(ToolError::invalid_option(format!(
                "To-do id prefix '{needle}' is ambiguous"
            ))),
        }
    }

    /// Gets an item by id.
    pub fn get(&self, id: Uuid) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> ToolResult<&mut TodoItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ToolError::invalid_option(format!("No to-do with id '{id}'")))
    }

    /// Flips the completed flag and returns the new state.
    pub fn toggle(&mut self, id: Uuid) -> ToolResult<bool> {
        let item = self.get_mut(id)?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Applies a partial edit. The item is unchanged if validation fails.
    pub fn edit(&mut self, id: Uuid, edit: TodoEdit) -> ToolResult<&TodoItem> {
        let text = match edit.text {
            Some(text) if text.trim().is_empty() => {
                return Err(ToolError::EmptyInput { field: "To-do text" })
            }
            Some(text) => Some(text.trim().to_string()),
            None => None,
        };

        let item = self.get_mut(id)?;
        if let Some(text) = text {
            item.text = text;
        }
        if let Some(priority) = edit.priority {
            item.priority = priority;
        }
        if let Some(category) = edit.category {
            let category = category.trim();
            item.category = if category.is_empty() {
                default_category()
            } else {
                category.to_string()
            };
        }
        if let Some(due_date) = edit.due_date {
            item.due_date = due_date;
        }
        Ok(item)
    }

    /// Removes an item and returns it.
    pub fn delete(&mut self, id: Uuid) -> ToolResult<TodoItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ToolError::invalid_option(format!("No to-do with id '{id}'")))?;
        Ok(self.items.remove(index))
    }

    /// Removes every completed item and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    /// Filtered and sorted view of the list.
    pub fn view(
        &self,
        filter: TodoFilter,
        category: Option<&str>,
        sort: TodoSort,
    ) -> Vec<&TodoItem> {
        let mut items: Vec<&TodoItem> = self
            .items
            .iter()
            .filter(|item| match filter {
                TodoFilter::All => true,
                TodoFilter::Active => !item.completed,
                TodoFilter::Completed => item.completed,
            })
            .filter(|item| category.map_or(true, |c| item.category.eq_ignore_ascii_case(c)))
            .collect();

        match sort {
            TodoSort::Created => items.sort_by_key(|item| item.created_at),
            TodoSort::Due => items.sort_by(|a, b| match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a.created_at.cmp(&b.created_at),
            }),
            TodoSort::Priority => items.sort_by(|a, b| {
                b.priority
                    .cmp(&a.priority)
                    .then(a.created_at.cmp(&b.created_at))
            }),
            TodoSort::Text => items.sort_by_key(|item| item.text.to_lowercase()),
        }

        items
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// Counters relative to `today`.
    pub fn stats(&self, today: NaiveDate) -> TodoStats {
        let completed = self.items.iter().filter(|item| item.completed).count();
        TodoStats {
            total: self.items.len(),
            active: self.items.len() - completed,
            completed,
            overdue: self.items.iter().filter(|item| item.is_overdue(today)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_todo(text: &str) -> NewTodo {
        NewTodo {
            text: text.to_string(),
            ..NewTodo::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_defaults() {
        let mut list = TodoList::new();
        let item = list.add(new_todo("  Buy milk  ")).unwrap();
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert_eq!(item.priority, Priority::Medium);
        assert_eq!(item.category, "general");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_empty_rejected() {
        let mut list = TodoList::new();
        assert_eq!(
            list.add(new_todo("   ")).unwrap_err(),
            ToolError::EmptyInput { field: "To-do text" }
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_edit_delete() {
        let mut list = TodoList::new();
        let id = list.add(new_todo("Buy milk")).unwrap().id;

        assert!(list.toggle(id).unwrap());
        assert!(list.get(id).unwrap().completed);
        assert!(!list.toggle(id).unwrap());

        let edited = list
            .edit(
                id,
                TodoEdit {
                    text: Some("Buy oat milk".to_string()),
                    priority: Some(Priority::High),
                    category: Some("errands".to_string()),
                    due_date: Some(Some(date(2026, 1, 5))),
                },
            )
            .unwrap();
        assert_eq!(edited.text, "Buy oat milk");
        assert_eq!(edited.priority, Priority::High);
        assert_eq!(edited.category, "errands");
        assert_eq!(edited.due_date, Some(date(2026, 1, 5)));

        let removed = list.delete(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(list.get(id).is_none());
        assert!(list.delete(id).is_err());
    }

    #[test]
    fn test_edit_empty_text_leaves_item_untouched() {
        let mut list = TodoList::new();
        let id = list.add(new_todo("Keep me")).unwrap().id;
        let result = list.edit(
            id,
            TodoEdit {
                text: Some(" ".to_string()),
                priority: Some(Priority::Low),
                ..TodoEdit::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(list.get(id).unwrap().priority, Priority::Medium);
    }

    #[test]
    fn test_find_by_prefix() {
        let mut list = TodoList::new();
        let id = list.add(new_todo("a")).unwrap().id;
        let full = id.to_string();

        assert_eq!(list.find(&full).unwrap(), id);
        assert_eq!(list.find(&full[..8]).unwrap(), id);
        assert_eq!(list.find(&full[..8].to_uppercase()).unwrap(), id);
        assert!(list.find(&full[..2]).is_err());
        assert!(list.find("ffffffff-ffff-4fff-bfff-ffffffffffff").is_err());
    }

    #[test]
    fn test_clear_completed() {
        let mut list = TodoList::new();
        let a = list.add(new_todo("a")).unwrap().id;
        list.add(new_todo("b")).unwrap();
        list.toggle(a).unwrap();

        assert_eq!(list.clear_completed(), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "b");
    }

    #[test]
    fn test_view_filter_and_sort() {
        let mut list = TodoList::new();
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 1, 3, 0, 0, 0).unwrap();

        let low = list
            .add_at(
                NewTodo {
                    text: "zebra".to_string(),
                    priority: Priority::Low,
                    due_date: Some(date(2025, 3, 1)),
                    ..NewTodo::default()
                },
                t0,
            )
            .unwrap()
            .id;
        list.add_at(
            NewTodo {
                text: "apple".to_string(),
                priority: Priority::High,
                category: Some("work".to_string()),
                ..NewTodo::default()
            },
            t1,
        )
        .unwrap();
        list.add_at(
            NewTodo {
                text: "mango".to_string(),
                due_date: Some(date(2025, 2, 1)),
                ..NewTodo::default()
            },
            t2,
        )
        .unwrap();
        list.toggle(low).unwrap();

        let texts = |items: Vec<&TodoItem>| items.iter().map(|i| i.text.clone()).collect::<Vec<_>>();

        assert_eq!(
            texts(list.view(TodoFilter::All, None, TodoSort::Created)),
            ["zebra", "apple", "mango"]
        );
        assert_eq!(
            texts(list.view(TodoFilter::All, None, TodoSort::Due)),
            ["mango", "zebra", "apple"]
        );
        assert_eq!(
            texts(list.view(TodoFilter::All, None, TodoSort::Priority)),
            ["apple", "mango", "zebra"]
        );
        assert_eq!(
            texts(list.view(TodoFilter::All, None, TodoSort::Text)),
            ["apple", "mango", "zebra"]
        );
        assert_eq!(
            texts(list.view(TodoFilter::Active, None, TodoSort::Created)),
            ["apple", "mango"]
        );
        assert_eq!(
            texts(list.view(TodoFilter::Completed, None, TodoSort::Created)),
            ["zebra"]
        );
        assert_eq!(
            texts(list.view(TodoFilter::All, Some("WORK"), TodoSort::Created)),
            ["apple"]
        );
        assert_eq!(list.categories(), ["general", "work"]);
    }

    #[test]
    fn test_stats_overdue() {
        let mut list = TodoList::new();
        let done = list
            .add(NewTodo {
                text: "done".to_string(),
                due_date: Some(date(2025, 1, 1)),
                ..NewTodo::default()
            })
            .unwrap()
            .id;
        list.add(NewTodo {
            text: "late".to_string(),
            due_date: Some(date(2025, 1, 1)),
            ..NewTodo::default()
        })
        .unwrap();
        list.add(new_todo("someday")).unwrap();
        list.toggle(done).unwrap();

        let stats = list.stats(date(2025, 6, 1));
        assert_eq!(
            stats,
            TodoStats {
                total: 3,
                active: 2,
                completed: 1,
                overdue: 1
            }
        );
    }

    #[test]
    fn test_serialized_shape_is_plain_array() {
        let mut list = TodoList::new();
        list.add(new_todo("Buy milk")).unwrap();
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["text"], "Buy milk");
        assert_eq!(json[0]["priority"], "medium");
        assert_eq!(json[0]["completed"], false);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse("med"), Some(Priority::Medium));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_listing_defaults() {
        assert_eq!(TodoFilter::default(), TodoFilter::All);
        assert_eq!(TodoSort::default(), TodoSort::Created);
        assert_eq!(TodoFilter::ALL[0], TodoFilter::default());
    }
}
