//! Immutable content catalog.
//!
//! The catalog is loaded once at start-up (from a JSON/YAML file or the
//! built-in seed data) and never mutated afterwards. All browse views are
//! derived from it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::info;

use super::facets::{compute_facets, FacetCounts};
use super::filter::apply_filters;
use super::views::most_recent;
use crate::domain::{ContentId, ContentItem, FilterState};

/// Seed catalog compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Current catalog file format version
pub const CATALOG_VERSION: u32 = 1;

/// Errors that can occur loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// On-disk catalog layout: a bare list of items or a versioned document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Versioned {
        #[serde(default = "default_version")]
        version: u32,
        items: Vec<ContentItem>,
    },
    Items(Vec<ContentItem>),
}

fn default_version() -> u32 {
    CATALOG_VERSION
}

/// Catalog of curated content, in source order
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    version: u32,
    items: Vec<ContentItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

impl Catalog {
    /// Build a catalog from already-validated items
    pub fn from_items(items: Vec<ContentItem>) -> Self {
        Self {
            version: CATALOG_VERSION,
            items,
        }
    }

    /// The seed catalog shipped with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from JSON
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::from_file(file))
    }

    /// Parse a catalog from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Versioned { version, items } => Self { version, items },
            CatalogFile::Items(items) => Self::from_items(items),
        }
    }

    /// Load a catalog file; `.yaml`/`.yml` are read as YAML, anything else as JSON
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        let catalog = if is_yaml {
            Self::from_yaml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        info!(path = %path.display(), items = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Load from `path` when given, else the built-in catalog
    pub async fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path).await,
            None => {
                let catalog = Self::builtin()?;
                info!(items = catalog.len(), "Using built-in catalog");
                Ok(catalog)
            }
        }
    }

    /// Catalog format version
    pub fn version(&self) -> u32 {
        self.version
    }

    /// All items in source order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Iterate items in source order
    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    /// Get an item by ID; `None` means not found
    pub fn get(&self, id: &ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Search the whole catalog (case-insensitive substring match).
    ///
    /// A blank query yields no results here: with nothing typed there is no
    /// search to show.
    pub fn search(&self, query: &str) -> Vec<&ContentItem> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        apply_filters(&self.items, &FilterState::all(), query)
    }

    /// Items visible under a filter state and query
    pub fn filter(&self, state: &FilterState, query: &str) -> Vec<&ContentItem> {
        apply_filters(&self.items, state, query)
    }

    /// Catalog-wide facet counts
    pub fn facets(&self) -> FacetCounts {
        compute_facets(&self.items)
    }

    /// The `n` most recently submitted items, newest first
    pub fn most_recent(&self, n: usize) -> Vec<&ContentItem> {
        most_recent(&self.items, n)
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
