//! Filter State Codec Integration Tests
//!
//! Tests for encoding filter state into browse links and decoding it back.

use std::sync::Arc;

use readworthy::library::params::{self, decode, encode, from_query_string, to_query_string};
use readworthy::{BrowseSession, Catalog, ContentType, Difficulty, FilterState, Locale, ParamError};

#[test]
fn test_round_trip_every_concrete_pair() {
    for ct in ContentType::ALL {
        for d in Difficulty::ALL {
            let state = FilterState::category(ct).with_difficulty(d);
            assert_eq!(from_query_string(&to_query_string(&state)), state);
            assert_eq!(decode(encode(&state)), state);
        }
    }
}

#[test]
fn test_omitted_fields_mean_all() {
    let state = FilterState::category(ContentType::Article);
    assert_eq!(encode(&state), vec![("category", "Article")]);

    let state = FilterState::all().with_difficulty(Difficulty::Advanced);
    assert_eq!(to_query_string(&state), "difficulty=Advanced");
    assert_eq!(from_query_string("difficulty=Advanced"), state);
}

#[test]
fn test_wrong_case_is_invalid() {
    let state = from_query_string("category=Podcast&difficulty=beginner");
    assert_eq!(
        state,
        FilterState {
            content_type: Some(ContentType::Podcast),
            difficulty: None,
        }
    );

    assert_eq!(from_query_string("category=VIDEO").content_type, None);
}

#[test]
fn test_malformed_values_never_raise() {
    for raw in [
        "category",
        "category=&difficulty=",
        "category=Article%00",
        "difficulty=Advanced%20",
        "=&=&&",
        "%E0%A4%A",
        "category=初级&difficulty=进阶",
    ] {
        let state = from_query_string(raw);
        assert!(state.content_type.is_none(), "{:?}", raw);
        assert!(state.difficulty.is_none(), "{:?}", raw);
    }
}

#[test]
fn test_percent_encoded_values_decode() {
    let state = from_query_string("category=%56ideo&difficulty=Beginner");
    assert_eq!(state.content_type, Some(ContentType::Video));
    assert_eq!(state.difficulty, Some(Difficulty::Beginner));
}

#[test]
fn test_parse_errors_are_classified() {
    assert!(matches!(
        params::parse_category("Blog"),
        Err(ParamError::InvalidValue { name: "category", .. })
    ));
    assert_eq!(params::parse_difficulty("Intermediate"), Ok(Difficulty::Intermediate));
}

#[test]
fn test_session_decodes_once_then_re_encodes() {
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let mut session = BrowseSession::from_query_string(Arc::clone(&catalog), "category=Podcast");
    assert_eq!(session.visible().len(), 6);
    assert_eq!(session.heading(Locale::En), "Podcasts");

    session.select_difficulty(ContentType::Podcast, Difficulty::Beginner);
    assert_eq!(
        session.share_link(),
        "/browse?category=Podcast&difficulty=Beginner"
    );

    // Search text is not part of the shareable state
    session.set_search("AI");
    assert!(session.share_link().ends_with("difficulty=Beginner"));
    assert_eq!(session.heading(Locale::En), "Search Results");

    session.select_all();
    assert_eq!(session.share_link(), "/browse");
}
