//! readworthy - Curated AI knowledge library
//!
//! A browsable catalog of curated articles, podcasts and videos with
//! faceted filtering, free-text search and shareable browse links.
//!
//! # Architecture
//!
//! The catalog is loaded once and never mutated:
//! - Browse views are pure functions of (catalog, filter state, query)
//! - Facet counts always cover the whole catalog
//! - Filter state round-trips through `?category=..&difficulty=..`
//!
//! # Modules
//!
//! - `domain`: Data structures (ContentItem, ContentType, Difficulty, FilterState)
//! - `library`: Catalog, filter engine, facets, search, recency views, params codec
//! - `config`: Configuration discovery and resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Browse podcasts
//! readworthy browse --category podcast
//!
//! # Open a shared link
//! readworthy browse --params "category=Video&difficulty=Beginner"
//!
//! # Search everything
//! readworthy search chatgpt
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use domain::{ContentId, ContentItem, ContentType, Difficulty, FilterState};
pub use library::{
    apply_filters, compute_facets, matches, most_recent, BrowseSession, Catalog, CatalogError,
    FacetCounts, Locale, ParamError,
};
