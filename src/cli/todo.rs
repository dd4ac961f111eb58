//! To-do list commands.

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

use crate::cli::common::{load_config, open_store, print_json, CliError, CliResult};
use crate::models::{NewTodo, Priority, TodoEdit, TodoFilter, TodoItem, TodoSort};
use crate::services::TodoService;

/// Manage the persistent to-do list
#[derive(Debug, Clone, Args)]
pub struct TodoArgs {
    /// To-do subcommand
    #[command(subcommand)]
    pub command: TodoCommand,
}

/// To-do subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum TodoCommand {
    /// Add an item
    Add(AddArgs),
    /// List items
    List(ListArgs),
    /// Mark an item done, or open again
    Toggle(IdArgs),
    /// Change an item
    Edit(EditArgs),
    /// Delete an item
    Delete(IdArgs),
    /// Delete every completed item
    ClearCompleted,
    /// Show counters
    Stats(StatsArgs),
}

impl TodoArgs {
    /// Execute the todo command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut service = TodoService::new(open_store(&config)?);

        match &self.command {
            TodoCommand::Add(args) => args.execute(&mut service),
            TodoCommand::List(args) => args.execute(&service),
            TodoCommand::Toggle(args) => {
                let item = service
                    .toggle(&args.id)
                    .map_err(|e| CliError::service(&e))?;
                let state = if item.completed { "Completed" } else { "Reopened" };
                println!("{state}: {}", item.text);
                Ok(())
            }
            TodoCommand::Edit(args) => args.execute(&mut service),
            TodoCommand::Delete(args) => {
                let item = service
                    .delete(&args.id)
                    .map_err(|e| CliError::service(&e))?;
                println!("Deleted: {}", item.text);
                Ok(())
            }
            TodoCommand::ClearCompleted => {
                let removed = service
                    .clear_completed()
                    .map_err(|e| CliError::service(&e))?;
                println!("Removed {removed} completed item(s).");
                Ok(())
            }
            TodoCommand::Stats(args) => args.execute(&service),
        }
    }
}

fn parse_due(input: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::validation(format!("Due date '{input}' is not a YYYY-MM-DD date")))
}

fn short_id(item: &TodoItem) -> String {
    item.id.simple().to_string()[..8].to_string()
}

fn print_item(item: &TodoItem, today: NaiveDate) {
    let mark = if item.completed { "x" } else { " " };
    let due = match item.due_date {
        Some(due) if item.is_overdue(today) => format!("  due {due} (overdue)"),
        Some(due) => format!("  due {due}"),
        None => String::new(),
    };
    println!(
        "[{mark}] {}  {:<6} {:<10} {}{due}",
        short_id(item),
        item.priority,
        item.category,
        item.text
    );
}

/// Item selector
#[derive(Debug, Clone, Args)]
pub struct IdArgs {
    /// Full id or a unique prefix of at least 4 characters
    #[arg(value_name = "ID")]
    id: String,
}

/// New item
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(value_name = "TEXT")]
    text: String,

    /// low, medium or high
    #[arg(long, default_value = "medium")]
    priority: Priority,

    /// Category (defaults to "general")
    #[arg(long)]
    category: Option<String>,

    /// Due date, YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    due: Option<String>,

    /// Print the new item as JSON
    #[arg(long)]
    json: bool,
}

impl AddArgs {
    fn execute(&self, service: &mut TodoService) -> CliResult<()> {
        let due_date = self.due.as_deref().map(parse_due).transpose()?;
        let item = service
            .add(NewTodo {
                text: self.text.clone(),
                priority: self.priority,
                category: self.category.clone(),
                due_date,
            })
            .map_err(|e| CliError::service(&e))?;

        if self.json {
            return print_json(&item);
        }
        println!("Added {}: {}", short_id(&item), item.text);
        Ok(())
    }
}

/// Listing
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// all, active or completed
    #[arg(long, default_value = "all")]
    filter: TodoFilter,

    /// Only this category
    #[arg(long)]
    category: Option<String>,

    /// created, due, priority or text
    #[arg(long, default_value = "created")]
    sort: TodoSort,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    fn execute(&self, service: &TodoService) -> CliResult<()> {
        let items = service
            .list()
            .view(self.filter, self.category.as_deref(), self.sort);

        if self.json {
            return print_json(&items);
        }
        if items.is_empty() {
            println!("No to-do items.");
            return Ok(());
        }
        let today = Local::now().date_naive();
        for item in items {
            print_item(item, today);
        }
        Ok(())
    }
}

/// Item changes
#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Full id or a unique prefix of at least 4 characters
    #[arg(value_name = "ID")]
    id: String,

    /// New description
    #[arg(long)]
    text: Option<String>,

    /// New priority
    #[arg(long)]
    priority: Option<Priority>,

    /// New category
    #[arg(long)]
    category: Option<String>,

    /// New due date, YYYY-MM-DD
    #[arg(long, value_name = "DATE", conflicts_with = "clear_due")]
    due: Option<String>,

    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
}

impl EditArgs {
    fn execute(&self, service: &mut TodoService) -> CliResult<()> {
        let due_date = if self.clear_due {
            Some(None)
        } else {
            self.due.as_deref().map(parse_due).transpose()?.map(Some)
        };
        let edit = TodoEdit {
            text: self.text.clone(),
            priority: self.priority,
            category: self.category.clone(),
            due_date,
        };
        if edit.text.is_none()
            && edit.priority.is_none()
            && edit.category.is_none()
            && edit.due_date.is_none()
        {
            return Err(CliError::validation(
                "Nothing to change. Pass --text, --priority, --category, --due or --clear-due",
            ));
        }

        let item = service
            .edit(&self.id, edit)
            .map_err(|e| CliError::service(&e))?;
        println!("Updated {}: {}", short_id(&item), item.text);
        Ok(())
    }
}

/// Counters
#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl StatsArgs {
    fn execute(&self, service: &TodoService) -> CliResult<()> {
        let stats = service.list().stats(Local::now().date_naive());
        if self.json {
            return print_json(&stats);
        }
        println!("Total:     {}", stats.total);
        println!("Active:    {}", stats.active);
        println!("Completed: {}", stats.completed);
        println!("Overdue:   {}", stats.overdue);
        Ok(())
    }
}
