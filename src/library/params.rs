//! URL query parameter codec for [`FilterState`].
//!
//! ```text
//! /browse                                   -> All / All
//! /browse?category=Podcast                  -> Podcast / All
//! /browse?category=Video&difficulty=Advanced -> Video / Advanced
//! ```
//!
//! Omitted parameters mean "All". Decoding never fails: a value outside its
//! enumeration (wrong case included) falls back to "All" for that field.

use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

use crate::domain::{ContentType, Difficulty, FilterState};

/// Query parameter carrying the content type
pub const CATEGORY_PARAM: &str = "category";

/// Query parameter carrying the difficulty level
pub const DIFFICULTY_PARAM: &str = "difficulty";

/// Path of the browse view
pub const BROWSE_PATH: &str = "/browse";

/// A parameter value that is not part of its closed enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Invalid value for '{name}': {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Parse a `category` value (exact symbol match)
pub fn parse_category(value: &str) -> Result<ContentType, ParamError> {
    ContentType::from_symbol(value).ok_or_else(|| ParamError::InvalidValue {
        name: CATEGORY_PARAM,
        value: value.to_string(),
    })
}

/// Parse a `difficulty` value (exact symbol match)
pub fn parse_difficulty(value: &str) -> Result<Difficulty, ParamError> {
    Difficulty::from_symbol(value).ok_or_else(|| ParamError::InvalidValue {
        name: DIFFICULTY_PARAM,
        value: value.to_string(),
    })
}

/// Encode a filter state as query parameters, omitting "All" fields
pub fn encode(state: &FilterState) -> Vec<(&'static str, &'static str)> {
    let mut params = Vec::with_capacity(2);
    if let Some(ct) = state.content_type {
        params.push((CATEGORY_PARAM, ct.symbol()));
    }
    if let Some(d) = state.difficulty {
        params.push((DIFFICULTY_PARAM, d.symbol()));
    }
    params
}

/// Encode a filter state as a query string (no leading `?`)
pub fn to_query_string(state: &FilterState) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(encode(state))
        .finish()
}

/// Shareable link to the browse view for a filter state
pub fn browse_link(state: &FilterState) -> String {
    let query = to_query_string(state);
    if query.is_empty() {
        BROWSE_PATH.to_string()
    } else {
        format!("{}?{}", BROWSE_PATH, query)
    }
}

/// Decode a filter state from query parameters.
///
/// The first occurrence of each parameter wins; unknown parameters are
/// ignored. Invalid values fall back to "All" for that field only.
pub fn decode<I, K, V>(pairs: I) -> FilterState
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut category: Option<String> = None;
    let mut difficulty: Option<String> = None;

    for (key, value) in pairs {
        match key.as_ref() {
            CATEGORY_PARAM if category.is_none() => category = Some(value.as_ref().to_string()),
            DIFFICULTY_PARAM if difficulty.is_none() => {
                difficulty = Some(value.as_ref().to_string())
            }
            _ => {}
        }
    }

    FilterState {
        content_type: category.and_then(|v| fallback(parse_category(&v))),
        difficulty: difficulty.and_then(|v| fallback(parse_difficulty(&v))),
    }
}

/// Decode a filter state from a raw query string (leading `?` allowed)
pub fn from_query_string(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    decode(form_urlencoded::parse(query.as_bytes()))
}

fn fallback<T>(parsed: Result<T, ParamError>) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("{}; falling back to All", e);
            None
        }
    }
}
