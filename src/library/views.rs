//! Recency views ("featured", "recent") over the catalog.

use crate::domain::ContentItem;

/// The `n` most recently submitted items, newest first.
///
/// Sorts a copy of the references; the catalog order is untouched. Items
/// with equal timestamps keep their catalog order.
pub fn most_recent<'a, I>(items: I, n: usize) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let mut items: Vec<_> = items.into_iter().collect();
    // sort_by is stable
    items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    items.truncate(n);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentType, Difficulty};

    fn dated(id: &str, ts: &str) -> ContentItem {
        ContentItem::new(id, id, ContentType::Article, Difficulty::Beginner, ts.parse().unwrap())
    }

    #[test]
    fn test_most_recent_orders_and_truncates() {
        let items = vec![
            dated("jan10", "2024-01-10T00:00:00Z"),
            dated("jan15", "2024-01-15T00:00:00Z"),
            dated("jan08", "2024-01-08T00:00:00Z"),
        ];

        let recent = most_recent(&items, 2);
        let ids: Vec<_> = recent.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["jan15", "jan10"]);

        // Source order untouched
        assert_eq!(items[0].id.as_str(), "jan10");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let items = vec![
            dated("first", "2024-01-15T10:30:00Z"),
            dated("older", "2024-01-14T10:30:00Z"),
            dated("second", "2024-01-15T10:30:00Z"),
        ];

        let recent = most_recent(&items, 3);
        let ids: Vec<_> = recent.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "older"]);
    }

    #[test]
    fn test_short_catalog_returns_everything() {
        let items = vec![dated("only", "2024-01-15T00:00:00Z")];
        assert_eq!(most_recent(&items, 6).len(), 1);
        assert!(most_recent(&items, 0).is_empty());
        assert!(most_recent(&Vec::<ContentItem>::new(), 2).is_empty());
    }
}
