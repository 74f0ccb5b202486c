//! Domain types for the content catalog.
//!
//! - ContentItem: a single curated article, podcast or video
//! - ContentType / Difficulty: the closed facet enumerations
//! - FilterState: the category/difficulty selection of a browsing session

pub mod content;
pub mod filter_state;

// Re-export commonly used types
pub use content::{ContentId, ContentItem, ContentType, Difficulty};
pub use filter_state::FilterState;
