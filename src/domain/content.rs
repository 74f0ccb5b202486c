//! Content item types.
//!
//! Items are immutable once loaded. Content types and difficulty levels are
//! symbolic values; display strings live in [`crate::library::labels`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opaque content identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive a provisional identifier from a URL (SHA256(url)[0:16])
    pub fn from_url(url: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let result = hasher.finalize();

        // Take first 8 bytes (16 hex chars)
        let hash: String = result[..8].iter().map(|b| format!("{:02x}", b)).collect();
        Self(hash)
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Type of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentType {
    /// Article, blog post or paper
    Article,

    /// Podcast episode
    Podcast,

    /// Video
    Video,
}

impl ContentType {
    /// Every content type, in sidebar order
    pub const ALL: [ContentType; 3] = [ContentType::Article, ContentType::Podcast, ContentType::Video];

    /// Canonical symbol used in URL parameters and catalog files
    pub fn symbol(self) -> &'static str {
        match self {
            ContentType::Article => "Article",
            ContentType::Podcast => "Podcast",
            ContentType::Video => "Video",
        }
    }

    /// Exact-match lookup of a canonical symbol
    pub fn from_symbol(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == s)
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Difficulty level, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "初级")]
    Beginner,

    #[serde(alias = "进阶")]
    Intermediate,

    #[serde(alias = "高级")]
    Advanced,
}

impl Difficulty {
    /// Every difficulty level, easiest first
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Canonical symbol used in URL parameters and catalog files
    pub fn symbol(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Exact-match lookup of a canonical symbol
    pub fn from_symbol(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.symbol() == s)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single curated item in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Unique content identifier
    pub id: ContentId,

    /// Human-readable title
    pub title: String,

    /// Who submitted (or authored) the item
    pub submitter: String,

    /// Type of content
    pub content_type: ContentType,

    /// How demanding the item is
    pub difficulty_level: Difficulty,

    /// External resource locator
    pub url: String,

    /// Short description
    pub summary: String,

    /// When the item was submitted (ISO 8601)
    pub submitted_at: DateTime<Utc>,

    /// Tags in display order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ContentItem {
    /// Create a new content item with empty free-text fields
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        content_type: ContentType,
        difficulty_level: Difficulty,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            submitter: String::new(),
            content_type,
            difficulty_level,
            url: String::new(),
            summary: String::new(),
            submitted_at,
            tags: Vec::new(),
        }
    }

    /// Set the submitter
    pub fn with_submitter(mut self, submitter: impl Into<String>) -> Self {
        self.submitter = submitter.into();
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the source URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}
