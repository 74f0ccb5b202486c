//! Filter engine: facet selection plus free-text search over the catalog.
//!
//! Filters are applied in a fixed order (content type, difficulty, search).
//! Each step is an independent per-item predicate, so the order only
//! affects how much work later steps do, never the result.

use tracing::debug;

use super::search::{matches_normalized, normalize_query};
use crate::domain::{ContentItem, FilterState};

/// Narrow `items` to those visible under `state` and `query`.
///
/// Preserves input order. Reapplying the same state and query to the
/// output yields the same output.
pub fn apply_filters<'a, I>(items: I, state: &FilterState, query: &str) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let needle = normalize_query(query);

    let visible: Vec<&ContentItem> = items
        .into_iter()
        .filter(|item| {
            state
                .content_type
                .map_or(true, |ct| item.content_type == ct)
        })
        .filter(|item| {
            state
                .difficulty
                .map_or(true, |d| item.difficulty_level == d)
        })
        .filter(|item| match &needle {
            Some(needle) => matches_normalized(item, needle),
            None => true,
        })
        .collect();

    debug!(
        content_type = ?state.content_type,
        difficulty = ?state.difficulty,
        query = needle.as_deref().unwrap_or(""),
        visible = visible.len(),
        "Applied filters"
    );

    visible
}

/// Positions of the visible items within `items`, in order
pub(crate) fn visible_positions(items: &[ContentItem], state: &FilterState, query: &str) -> Vec<usize> {
    let needle = normalize_query(query);
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            state.content_type.map_or(true, |ct| item.content_type == ct)
                && state.difficulty.map_or(true, |d| item.difficulty_level == d)
                && needle
                    .as_deref()
                    .map_or(true, |needle| matches_normalized(item, needle))
        })
        .map(|(pos, _)| pos)
        .collect()
}
