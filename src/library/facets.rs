//! Catalog-wide facet counts for the browse sidebar.
//!
//! Counts always cover the whole catalog, never the filtered subset, so a
//! user looking at "Video · Advanced" still sees how many articles exist.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{ContentItem, ContentType, Difficulty};

/// Counts for one content type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeFacet {
    /// Items of this type
    pub total: usize,

    /// Items of this type per difficulty; only levels actually present
    pub difficulties: BTreeMap<Difficulty, usize>,
}

impl TypeFacet {
    /// Count for a difficulty level; absent levels count as zero
    pub fn difficulty(&self, difficulty: Difficulty) -> usize {
        self.difficulties.get(&difficulty).copied().unwrap_or(0)
    }
}

/// Facet counts derived from a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    /// Every item in the catalog
    pub total: usize,

    /// Per content type; every type is present, possibly with zero counts
    pub by_type: BTreeMap<ContentType, TypeFacet>,
}

impl FacetCounts {
    /// Counts for a content type
    pub fn for_type(&self, content_type: ContentType) -> TypeFacet {
        self.by_type.get(&content_type).cloned().unwrap_or_default()
    }

    /// Number of items of a type
    pub fn type_total(&self, content_type: ContentType) -> usize {
        self.by_type.get(&content_type).map_or(0, |f| f.total)
    }

    /// Number of items of a type at a difficulty level
    pub fn count(&self, content_type: ContentType, difficulty: Difficulty) -> usize {
        self.by_type
            .get(&content_type)
            .map_or(0, |f| f.difficulty(difficulty))
    }
}

/// Compute facet counts over the whole catalog
pub fn compute_facets<'a, I>(items: I) -> FacetCounts
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let mut counts = FacetCounts {
        total: 0,
        by_type: ContentType::ALL
            .into_iter()
            .map(|ct| (ct, TypeFacet::default()))
            .collect(),
    };

    for item in items {
        counts.total += 1;
        let facet = counts.by_type.entry(item.content_type).or_default();
        facet.total += 1;
        *facet.difficulties.entry(item.difficulty_level).or_insert(0) += 1;
    }

    counts
}
