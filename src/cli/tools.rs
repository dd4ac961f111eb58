//! Catalog browsing commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::catalog::{Catalog, CatalogQuery, CatalogSort};
use crate::cli::common::{load_config, open_store, print_json, CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::models::ToolDescriptor;
use crate::services::FavoritesService;

/// Browse and search the tool catalog
#[derive(Debug, Clone, Args)]
pub struct ToolsArgs {
    /// Catalog subcommand
    #[command(subcommand)]
    pub command: ToolsCommand,
}

/// Catalog subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ToolsCommand {
    /// List tools
    List(ListArgs),
    /// Search tools by name, keyword or description
    Search(SearchArgs),
    /// Show one tool
    Show(ShowArgs),
    /// List categories with their tool counts
    Categories(CategoriesArgs),
}

impl ToolsArgs {
    /// Execute the tools command
    pub fn execute(&self) -> CliResult<()> {
        let catalog =
            Catalog::load().map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;

        match &self.command {
            ToolsCommand::List(args) => args.execute(&catalog),
            ToolsCommand::Search(args) => args.execute(&catalog),
            ToolsCommand::Show(args) => args.execute(&catalog),
            ToolsCommand::Categories(args) => args.execute(&catalog),
        }
    }
}

/// Catalog entry as printed by `--json`.
#[derive(Debug, Serialize)]
struct ToolEntry<'a> {
    #[serde(flatten)]
    tool: &'a ToolDescriptor,
    command: String,
    favorite: bool,
}

impl<'a> ToolEntry<'a> {
    fn new(tool: &'a ToolDescriptor, favorites: &[String]) -> Self {
        Self {
            tool,
            command: format!("{APP_BINARY_NAME} {}", tool.kind.command()),
            favorite: favorites.iter().any(|f| *f == tool.id),
        }
    }
}

fn load_favorites() -> CliResult<Vec<String>> {
    let config = load_config()?;
    Ok(FavoritesService::new(open_store(&config)?).list().to_vec())
}

fn print_tools(tools: &[&ToolDescriptor], favorites: &[String], json: bool) -> CliResult<()> {
    if json {
        let entries: Vec<ToolEntry<'_>> = tools.iter().map(|t| ToolEntry::new(t, favorites)).collect();
        return print_json(&entries);
    }
    if tools.is_empty() {
        println!("No matching tools.");
        return Ok(());
    }
    for tool in tools {
        let star = if favorites.contains(&tool.id) { "*" } else { " " };
        println!("{star} {} {:<28} {}", tool.icon, tool.id, tool.description);
    }
    Ok(())
}

/// Tool listing
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Only this category
    #[arg(long)]
    category: Option<String>,

    /// catalog, name or category
    #[arg(long, default_value = "catalog")]
    sort: CatalogSort,

    /// Only favorites
    #[arg(long)]
    favorites: bool,

    /// Favorites ahead of the rest
    #[arg(long)]
    favorites_first: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    fn execute(&self, catalog: &Catalog) -> CliResult<()> {
        if let Some(category) = &self.category {
            if catalog.get_category(category).is_none() {
                return Err(CliError::validation(format!("Unknown category '{category}'")));
            }
        }
        let favorites = load_favorites()?;
        let tools = catalog.filter(&CatalogQuery {
            text: None,
            category: self.category.as_deref(),
            favorites: &favorites,
            favorites_only: self.favorites,
            sort: self.sort,
            favorites_first: self.favorites_first,
        });
        print_tools(&tools, &favorites, self.json)
    }
}

/// Search
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search text
    #[arg(value_name = "QUERY")]
    query: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn execute(&self, catalog: &Catalog) -> CliResult<()> {
        let favorites = load_favorites()?;
        let tools = catalog.search(&self.query);
        print_tools(&tools, &favorites, self.json)
    }
}

/// Tool details
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Tool id
    #[arg(value_name = "ID")]
    id: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ShowArgs {
    fn execute(&self, catalog: &Catalog) -> CliResult<()> {
        let tool = catalog
            .get(&self.id)
            .ok_or_else(|| CliError::validation(format!("Unknown tool id '{}'", self.id)))?;
        let favorites = load_favorites()?;
        let entry = ToolEntry::new(tool, &favorites);

        if self.json {
            return print_json(&entry);
        }

        let category = catalog
            .get_category(&tool.category)
            .map_or(tool.category.as_str(), |c| c.name.as_str());
        println!("{} {}", tool.icon, tool.name);
        println!("  id:       {}", tool.id);
        println!("  category: {category}");
        println!("  {}", tool.description);
        if !tool.keywords.is_empty() {
            println!("  keywords: {}", tool.keywords.join(", "));
        }
        println!("  run:      {}", entry.command);
        if entry.favorite {
            println!("  ★ favorite");
        }
        Ok(())
    }
}

/// Category listing
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryEntry<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    tools: usize,
}

impl CategoriesArgs {
    fn execute(&self, catalog: &Catalog) -> CliResult<()> {
        let entries: Vec<CategoryEntry<'_>> = catalog
            .categories()
            .iter()
            .map(|c| CategoryEntry {
                id: &c.id,
                name: &c.name,
                description: &c.description,
                tools: catalog.category_tools(&c.id).len(),
            })
            .collect();

        if self.json {
            return print_json(&entries);
        }
        for entry in &entries {
            println!("{:<14} {:<18} {:>2} tools", entry.id, entry.name, entry.tools);
        }
        println!();
        println!(
            "{} tools in {} categories",
            catalog.tool_count(),
            catalog.category_count()
        );
        Ok(())
    }
}
