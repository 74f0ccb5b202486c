//! A single user's browse session over a shared catalog.
//!
//! The session owns its [`FilterState`] and search text. The catalog is
//! shared read-only. The visible subset is recomputed on demand and
//! memoized against the `(catalog, filter, query)` triple, so repeated
//! renders with unchanged inputs skip the filter pass.

use std::sync::Arc;

use tracing::debug;

use super::catalog::Catalog;
use super::facets::FacetCounts;
use super::filter::visible_positions;
use super::labels::{self, Locale};
use super::params;
use crate::domain::{ContentItem, ContentType, Difficulty, FilterState};

/// Inputs and output of the last filter pass
#[derive(Debug)]
struct Memo {
    catalog: Arc<Catalog>,
    filter: FilterState,
    query: String,
    positions: Vec<usize>,
}

impl Memo {
    fn is_for(&self, catalog: &Arc<Catalog>, filter: &FilterState, query: &str) -> bool {
        Arc::ptr_eq(&self.catalog, catalog) && &self.filter == filter && self.query == query
    }
}

/// Browse state for one session
#[derive(Debug)]
pub struct BrowseSession {
    catalog: Arc<Catalog>,
    facets: FacetCounts,
    filter: FilterState,
    query: String,
    memo: Option<Memo>,
    recomputations: usize,
}

impl BrowseSession {
    /// Start a session showing everything
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_filter(catalog, FilterState::all())
    }

    /// Start a session with an explicit filter state
    pub fn with_filter(catalog: Arc<Catalog>, filter: FilterState) -> Self {
        let facets = catalog.facets();
        Self {
            catalog,
            facets,
            filter,
            query: String::new(),
            memo: None,
            recomputations: 0,
        }
    }

    /// Start a session from incoming URL query parameters.
    ///
    /// This is the only place parameters are decoded; later changes go
    /// through the action methods.
    pub fn from_query_string(catalog: Arc<Catalog>, query_string: &str) -> Self {
        let filter = params::from_query_string(query_string);
        debug!(?filter, "Session initialised from parameters");
        Self::with_filter(catalog, filter)
    }

    /// Swap in a different catalog; facets are recomputed immediately
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        if Arc::ptr_eq(&self.catalog, &catalog) {
            return;
        }
        self.facets = catalog.facets();
        self.catalog = catalog;
        self.memo = None;
    }

    /// Show the whole catalog ("All Content")
    pub fn select_all(&mut self) {
        self.filter = FilterState::all();
    }

    /// Show one category; any difficulty selection is cleared
    pub fn select_category(&mut self, content_type: ContentType) {
        self.filter = FilterState::category(content_type);
    }

    /// Show one difficulty level within a category
    pub fn select_difficulty(&mut self, content_type: ContentType, difficulty: Difficulty) {
        self.filter = FilterState::category(content_type).with_difficulty(difficulty);
    }

    /// Replace the filter state directly
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    /// Update the search text (stored as typed)
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clear the search text
    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    /// The shared catalog
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Current filter state
    pub fn filter(&self) -> FilterState {
        self.filter
    }

    /// Current search text, as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a search is active (non-blank query)
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Catalog-wide facet counts (independent of the current filter)
    pub fn facets(&self) -> &FacetCounts {
        &self.facets
    }

    /// Items visible under the current filter and search
    pub fn visible(&mut self) -> Vec<&ContentItem> {
        let fresh = match &self.memo {
            Some(memo) => !memo.is_for(&self.catalog, &self.filter, &self.query),
            None => true,
        };

        if fresh {
            let positions = visible_positions(self.catalog.items(), &self.filter, &self.query);
            self.recomputations += 1;
            debug!(
                filter = ?self.filter,
                query = %self.query,
                visible = positions.len(),
                "Recomputed visible items"
            );
            self.memo = Some(Memo {
                catalog: Arc::clone(&self.catalog),
                filter: self.filter,
                query: self.query.clone(),
                positions,
            });
        }

        let items = self.catalog.items();
        match &self.memo {
            Some(memo) => memo.positions.iter().map(|&p| &items[p]).collect(),
            None => Vec::new(),
        }
    }

    /// How many times the visible set has actually been recomputed
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Shareable link for the current filter state (search text excluded)
    pub fn share_link(&self) -> String {
        params::browse_link(&self.filter)
    }

    /// Heading for the current view
    pub fn heading(&self, locale: Locale) -> String {
        labels::view_heading(&self.filter, &self.query, locale)
    }

    /// Result count line for the current view
    pub fn summary(&mut self, locale: Locale) -> String {
        let count = self.visible().len();
        labels::result_summary(count, &self.query, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> BrowseSession {
        BrowseSession::new(Arc::new(Catalog::builtin().unwrap()))
    }

    #[test]
    fn test_starts_with_everything() {
        let mut session = session();
        assert_eq!(session.visible().len(), 11);
        assert_eq!(session.share_link(), "/browse");
    }

    #[test]
    fn test_category_click_resets_difficulty() {
        let mut session = session();
        session.select_difficulty(ContentType::Podcast, Difficulty::Beginner);
        assert_eq!(session.visible().len(), 1);

        session.select_category(ContentType::Podcast);
        assert_eq!(session.filter().difficulty, None);
        assert_eq!(session.visible().len(), 6);
    }

    #[test]
    fn test_facets_ignore_active_filter() {
        let mut session = session();
        let before = session.facets().clone();
        session.select_difficulty(ContentType::Video, Difficulty::Advanced);
        assert!(session.visible().is_empty());
        assert_eq!(session.facets(), &before);
        assert_eq!(session.facets().type_total(ContentType::Article), 3);
    }

    #[test]
    fn test_memoizes_unchanged_inputs() {
        let mut session = session();
        session.set_search("gpt");
        let first: Vec<_> = session.visible().iter().map(|i| i.id.clone()).collect();
        let second: Vec<_> = session.visible().iter().map(|i| i.id.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(session.recomputations(), 1);

        session.clear_search();
        session.visible();
        assert_eq!(session.recomputations(), 2);
    }

    #[test]
    fn test_catalog_swap_invalidates() {
        let mut session = session();
        session.visible();
        session.set_catalog(Arc::new(Catalog::default()));
        assert!(session.visible().is_empty());
        assert_eq!(session.facets().total, 0);
        assert_eq!(session.recomputations(), 2);
    }

    #[test]
    fn test_from_query_string_then_share() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let session = BrowseSession::from_query_string(catalog, "?category=Video&difficulty=Beginner");
        assert_eq!(session.share_link(), "/browse?category=Video&difficulty=Beginner");
        assert_eq!(session.heading(Locale::En), "Videos · Beginner");
    }
}
