//! Favorite tool commands.

use clap::{Args, Subcommand};
use serde_json::json;

use crate::catalog::Catalog;
use crate::cli::common::{load_config, open_store, print_json, CliError, CliResult};
use crate::services::FavoritesService;

/// Manage favorite tools
#[derive(Debug, Clone, Args)]
pub struct FavoritesArgs {
    /// Favorites subcommand
    #[command(subcommand)]
    pub command: FavoritesCommand,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Favorites subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesCommand {
    /// List favorites
    List,
    /// Add a favorite
    Add {
        /// Tool id
        id: String,
    },
    /// Remove a favorite
    Remove {
        /// Tool id
        id: String,
    },
    /// Add or remove a favorite
    Toggle {
        /// Tool id
        id: String,
    },
}

impl FavoritesArgs {
    /// Execute the favorites command
    pub fn execute(&self) -> CliResult<()> {
        let catalog =
            Catalog::load().map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;
        let config = load_config()?;
        let mut service = FavoritesService::new(open_store(&config)?);

        let (id, changed, favorite) = match &self.command {
            FavoritesCommand::List => return self.list(&catalog, &service),
            FavoritesCommand::Add { id } => {
                let changed = service.add(&catalog, id).map_err(|e| CliError::service(&e))?;
                (id, changed, true)
            }
            FavoritesCommand::Remove { id } => {
                let changed = service
                    .remove(&catalog, id)
                    .map_err(|e| CliError::service(&e))?;
                (id, changed, false)
            }
            FavoritesCommand::Toggle { id } => {
                let favorite = service
                    .toggle(&catalog, id)
                    .map_err(|e| CliError::service(&e))?;
                (id, true, favorite)
            }
        };

        if self.json {
            return print_json(&json!({ "id": id, "favorite": favorite, "changed": changed }));
        }
        match (favorite, changed) {
            (true, true) => println!("Added '{id}' to favorites."),
            (true, false) => println!("'{id}' is already a favorite."),
            (false, true) => println!("Removed '{id}' from favorites."),
            (false, false) => println!("'{id}' is not a favorite."),
        }
        Ok(())
    }

    fn list(&self, catalog: &Catalog, service: &FavoritesService) -> CliResult<()> {
        if self.json {
            return print_json(service.list());
        }
        if service.list().is_empty() {
            println!("No favorites yet.");
            return Ok(());
        }
        for id in service.list() {
            // a stored id may no longer be in the catalog
            match catalog.get(id) {
                Some(tool) => println!("{:<28} {}", tool.id, tool.name),
                None => println!("{id:<28} (unknown tool)"),
            }
        }
        Ok(())
    }
}
