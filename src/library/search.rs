//! Free-text search predicate.

use crate::domain::ContentItem;

/// Normalize a raw query: trimmed and lowercased, or `None` when blank.
///
/// A `None` query means "no active search".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether an item matches a free-text query.
///
/// Case-insensitive substring test over title, summary, submitter and every
/// tag. A blank query matches everything.
pub fn matches(item: &ContentItem, query: &str) -> bool {
    match normalize_query(query) {
        Some(needle) => matches_normalized(item, &needle),
        None => true,
    }
}

/// Same as [`matches`] for a needle already passed through [`normalize_query`]
pub(crate) fn matches_normalized(item: &ContentItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.summary.to_lowercase().contains(needle)
        || item.submitter.to_lowercase().contains(needle)
        || item.tags.iter().any(|t| t.to_lowercase().contains(needle))
}
