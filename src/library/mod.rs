//! Faceted browsing over the content catalog.
//!
//! Everything here is a pure function of the (immutable) catalog, the
//! session's filter state and the search text:
//!
//! ```text
//! Catalog ──► facets::compute_facets ──► sidebar counts
//!    │
//!    ├──► filter::apply_filters(state, query) ──► visible items
//!    │          (type ► difficulty ► search::matches)
//!    │
//!    └──► views::most_recent(n) ──► featured / recent
//!
//! ?category=..&difficulty=.. ◄──► params ◄──► FilterState
//! ```

pub mod catalog;
pub mod facets;
pub mod filter;
pub mod labels;
pub mod params;
pub mod search;
pub mod session;
pub mod submission;
pub mod views;

pub use catalog::{Catalog, CatalogError};
pub use facets::{compute_facets, FacetCounts, TypeFacet};
pub use filter::apply_filters;
pub use labels::Locale;
pub use params::ParamError;
pub use search::matches;
pub use session::BrowseSession;
pub use submission::{submit, SubmissionError, SubmissionReceipt};
pub use views::most_recent;
