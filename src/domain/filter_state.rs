//! Category/difficulty selection for a browsing session.

use serde::{Deserialize, Serialize};

use super::content::{ContentType, Difficulty};

/// Current facet selection. `None` in either field means "All".
///
/// Any combination is valid input to the filter engine, including a
/// difficulty without a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected content type (`None` = All)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,

    /// Selected difficulty level (`None` = All)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl FilterState {
    /// All content, no difficulty restriction
    pub fn all() -> Self {
        Self::default()
    }

    /// A single category with every difficulty
    pub fn category(content_type: ContentType) -> Self {
        Self {
            content_type: Some(content_type),
            difficulty: None,
        }
    }

    /// Restrict to a difficulty level
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// True when neither facet narrows the catalog
    pub fn is_all(&self) -> bool {
        self.content_type.is_none() && self.difficulty.is_none()
    }
}
