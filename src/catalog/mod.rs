//! Embedded tool catalog.
//!
//! The catalog is compiled into the binary from `tools.json` and parsed
//! once. Every descriptor resolves to a [`ToolKind`]; an entry without an
//! implementation, an unknown category or a repeated id fails the load.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{ToolCategory, ToolDescriptor, ToolKind};

named_options! {
    /// Ordering applied by [`Catalog::filter`].
    pub enum CatalogSort {
        /// Catalog order, or relevance when a text query is given
        Catalog => "catalog",
        /// Alphabetical by display name
        Name => "name",
        /// Grouped by category in category order
        Category => "category",
    }
}

impl Default for CatalogSort {
    fn default() -> Self {
        Self::Catalog
    }
}

/// Combined search, filter and sort request.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery<'a> {
    /// Relevance search text
    pub text: Option<&'a str>,
    /// Restrict to one category id
    pub category: Option<&'a str>,
    /// Favorite tool ids
    pub favorites: &'a [String],
    /// Only return favorites
    pub favorites_only: bool,
    /// Ordering
    pub sort: CatalogSort,
    /// Move favorites ahead of everything else (order otherwise kept)
    pub favorites_first: bool,
}

#[derive(Debug, Deserialize)]
struct RawDescriptor {
    id: String,
    name: String,
    category: String,
    icon: String,
    description: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Schema of tools.json.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[allow(dead_code)]
    version: String,
    categories: Vec<ToolCategory>,
    tools: Vec<RawDescriptor>,
}

/// Tool catalog with lookup by id and relevance search.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
    categories: Vec<ToolCategory>,
    /// Tool id -> index into `tools`
    lookup: HashMap<String, usize>,
}

impl Catalog {
    /// Loads the catalog embedded in the binary.
    pub fn load() -> Result<Self> {
        Self::from_json(include_str!("tools.json"))
            .context("Failed to load embedded tools.json")
    }

    fn from_json(json_data: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json_data).context("Failed to parse tool catalog")?;

        let mut tools = Vec::with_capacity(file.tools.len());
        let mut lookup = HashMap::new();

        for raw in file.tools {
            let kind: ToolKind = raw
                .id
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context(format!("Catalog entry '{}' has no implementation", raw.id))?;

            if !file.categories.iter().any(|c| c.id == raw.category) {
                anyhow::bail!(
                    "Catalog entry '{}' uses unknown category '{}'",
                    raw.id,
                    raw.category
                );
            }

            if lookup.insert(raw.id.clone(), tools.len()).is_some() {
                anyhow::bail!("Duplicate catalog entry '{}'", raw.id);
            }

            tools.push(ToolDescriptor {
                id: raw.id,
                name: raw.name,
                category: raw.category,
                icon: raw.icon,
                description: raw.description,
                keywords: raw.keywords,
                kind,
            });
        }

        Ok(Self {
            tools,
            categories: file.categories,
            lookup,
        })
    }

    /// Gets a tool by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ToolDescriptor> {
        let idx = self.lookup.get(id)?;
        self.tools.get(*idx)
    }

    /// True when `id` names a catalog tool.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    /// All tools in catalog order.
    #[must_use]
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[ToolCategory] {
        &self.categories
    }

    /// Gets a category by id.
    #[must_use]
    pub fn get_category(&self, id: &str) -> Option<&ToolCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Tools in one category, in catalog order.
    #[must_use]
    pub fn category_tools(&self, category_id: &str) -> Vec<&ToolDescriptor> {
        self.tools
            .iter()
            .filter(|t| t.category == category_id)
            .collect()
    }

    /// Number of tools.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    fn relevance(tool: &ToolDescriptor, query_lower: &str) -> Option<u32> {
        let id = tool.id.to_lowercase();
        let name = tool.name.to_lowercase();

        if id == query_lower || name == query_lower {
            return Some(100);
        }
        if id.starts_with(query_lower) || name.starts_with(query_lower) {
            return Some(50);
        }
        if id.contains(query_lower) || name.contains(query_lower) {
            return Some(10);
        }
        if tool
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(query_lower))
        {
            return Some(8);
        }
        if tool.description.to_lowercase().contains(query_lower) {
            return Some(5);
        }
        None
    }

    /// Searches ids, names, keywords and descriptions (case-insensitive).
    ///
    /// Results are ordered by relevance; equally relevant tools keep catalog
    /// order. An empty query returns every tool.
    ///
    /// # Examples
    ///
    /// ```
    /// use utilkit::catalog::Catalog;
    ///
    /// let catalog = Catalog::load().unwrap();
    /// let results = catalog.search("base64");
    /// assert_eq!(results[0].id, "base64");
    /// ```
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&ToolDescriptor> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return self.tools.iter().collect();
        }

        let mut results: Vec<(&ToolDescriptor, u32)> = self
            .tools
            .iter()
            .filter_map(|tool| Self::relevance(tool, &query_lower).map(|score| (tool, score)))
            .collect();

        // stable: ties keep catalog order
        results.sort_by(|a, b| b.1.cmp(&a.1));
        results.into_iter().map(|(tool, _)| tool).collect()
    }

    fn category_rank(&self, id: &str) -> usize {
        self.categories
            .iter()
            .position(|c| c.id == id)
            .unwrap_or(usize::MAX)
    }

    /// Applies a combined query.
    #[must_use]
    pub fn filter(&self, query: &CatalogQuery<'_>) -> Vec<&ToolDescriptor> {
        let is_favorite = |tool: &ToolDescriptor| query.favorites.iter().any(|f| *f == tool.id);

        let mut results: Vec<&ToolDescriptor> = self
            .search(query.text.unwrap_or_default())
            .into_iter()
            .filter(|tool| query.category.map_or(true, |c| tool.category == c))
            .filter(|tool| !query.favorites_only || is_favorite(tool))
            .collect();

        match query.sort {
            CatalogSort::Catalog => {}
            CatalogSort::Name => results.sort_by_key(|tool| tool.name.to_lowercase()),
            CatalogSort::Category => results.sort_by_key(|tool| self.category_rank(&tool.category)),
        }

        if query.favorites_first {
            results.sort_by_key(|tool| !is_favorite(tool));
        }

        results
    }
}
