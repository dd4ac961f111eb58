//! Data models shared by the catalog, the tools and the persisted state.
//!
//! Models are independent of the command line and of storage.

pub mod rgb;
pub mod todo;
pub mod tool;

pub use rgb::RgbColor;
pub use todo::{NewTodo, Priority, TodoEdit, TodoFilter, TodoItem, TodoList, TodoSort, TodoStats};
pub use tool::{ToolCategory, ToolDescriptor, ToolKind};
