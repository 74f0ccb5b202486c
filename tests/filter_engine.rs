//! Filter Engine Integration Tests
//!
//! Tests for filter composition, facet consistency, search and recency views.

use std::collections::BTreeMap;

use readworthy::{
    apply_filters, compute_facets, matches, most_recent, Catalog, ContentItem, ContentType,
    Difficulty, FilterState,
};

fn item(id: &str, ct: ContentType, d: Difficulty, ts: &str) -> ContentItem {
    ContentItem::new(id, format!("Item {}", id), ct, d, ts.parse().unwrap())
}

/// 3 articles (Beginner, Beginner, Advanced) and 2 podcasts (Intermediate)
fn scenario_catalog() -> Vec<ContentItem> {
    vec![
        item("a1", ContentType::Article, Difficulty::Beginner, "2024-01-10T00:00:00Z"),
        item("p1", ContentType::Podcast, Difficulty::Intermediate, "2024-01-11T00:00:00Z"),
        item("a2", ContentType::Article, Difficulty::Beginner, "2024-01-12T00:00:00Z"),
        item("a3", ContentType::Article, Difficulty::Advanced, "2024-01-13T00:00:00Z"),
        item("p2", ContentType::Podcast, Difficulty::Intermediate, "2024-01-14T00:00:00Z"),
    ]
}

fn every_state() -> Vec<FilterState> {
    let mut states = Vec::new();
    for ct in std::iter::once(None).chain(ContentType::ALL.into_iter().map(Some)) {
        for d in std::iter::once(None).chain(Difficulty::ALL.into_iter().map(Some)) {
            states.push(FilterState {
                content_type: ct,
                difficulty: d,
            });
        }
    }
    states
}

#[test]
fn test_all_state_with_empty_query_is_identity() {
    let builtin = Catalog::builtin().unwrap();
    let visible = apply_filters(&builtin, &FilterState::all(), "");
    let expected: Vec<&ContentItem> = builtin.iter().collect();
    assert_eq!(visible, expected);

    let items = scenario_catalog();
    assert_eq!(apply_filters(&items, &FilterState::all(), "  ").len(), items.len());
}

#[test]
fn test_idempotent_for_every_state_and_query() {
    let catalog = Catalog::builtin().unwrap();
    for state in every_state() {
        for query in ["", "gpt", "AI", "投资", "zzz-no-match"] {
            let once = apply_filters(&catalog, &state, query);
            let twice = apply_filters(once.iter().copied(), &state, query);
            assert_eq!(once, twice, "state {:?} query {:?}", state, query);
        }
    }
}

#[test]
fn test_filters_match_independent_predicates() {
    // Every visible item satisfies each predicate; every hidden one fails at least one
    let catalog = Catalog::builtin().unwrap();
    for state in every_state() {
        let visible = apply_filters(&catalog, &state, "ai");
        for it in catalog.iter() {
            let expected = state.content_type.map_or(true, |ct| it.content_type == ct)
                && state.difficulty.map_or(true, |d| it.difficulty_level == d)
                && matches(it, "ai");
            assert_eq!(visible.contains(&it), expected);
        }
    }
}

#[test]
fn test_facet_totals_are_consistent() {
    for items in [scenario_catalog(), Catalog::builtin().unwrap().items().to_vec(), Vec::new()] {
        let facets = compute_facets(&items);
        let type_sum: usize = ContentType::ALL.iter().map(|&ct| facets.type_total(ct)).sum();
        assert_eq!(type_sum, facets.total);
        assert_eq!(facets.total, items.len());

        for ct in ContentType::ALL {
            let per_difficulty: usize = Difficulty::ALL.iter().map(|&d| facets.count(ct, d)).sum();
            assert_eq!(facets.type_total(ct), per_difficulty);
        }
    }
}

#[test]
fn test_article_scenario() {
    let items = scenario_catalog();

    let visible = apply_filters(&items, &FilterState::category(ContentType::Article), "");
    let ids: Vec<&str> = visible.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);

    let article = compute_facets(&items).for_type(ContentType::Article);
    assert_eq!(article.total, 3);
    assert_eq!(
        article.difficulties,
        BTreeMap::from([(Difficulty::Beginner, 2), (Difficulty::Advanced, 1)])
    );
}

#[test]
fn test_difficulty_filter_without_category() {
    let items = scenario_catalog();
    let state = FilterState::all().with_difficulty(Difficulty::Intermediate);
    let ids: Vec<&str> = apply_filters(&items, &state, "")
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["p1", "p2"]);
}

#[test]
fn test_gpt_scenario() {
    let catalog = Catalog::builtin().unwrap();
    let wolfram = catalog.get(&"1".into()).unwrap();
    assert!(wolfram.title.starts_with("What Is ChatGPT Doing"));
    assert!(matches(wolfram, "gpt"));
    assert_eq!(matches(wolfram, "CHATGPT"), matches(wolfram, "chatgpt"));

    let unrelated = ContentItem::new(
        "x",
        "Insta360 founder interview",
        ContentType::Podcast,
        Difficulty::Intermediate,
        "2024-01-10T08:00:00Z".parse().unwrap(),
    )
    .with_submitter("晚点聊")
    .with_summary("Product strategy and growth.")
    .with_tags(["Insta360", "创业思考"]);
    assert!(!matches(&unrelated, "gpt"));
}

#[test]
fn test_most_recent_scenario() {
    let items = vec![
        item("jan10", ContentType::Video, Difficulty::Beginner, "2024-01-10T00:00:00Z"),
        item("jan15", ContentType::Video, Difficulty::Beginner, "2024-01-15T00:00:00Z"),
        item("jan08", ContentType::Video, Difficulty::Beginner, "2024-01-08T00:00:00Z"),
    ];
    let ids: Vec<&str> = most_recent(&items, 2).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["jan15", "jan10"]);
}

#[test]
fn test_builtin_featured_and_recent() {
    let catalog = Catalog::builtin().unwrap();

    let featured: Vec<&str> = catalog.most_recent(2).iter().map(|i| i.id.as_str()).collect();
    // 01-16 first, then the earlier of the two 01-15 items in catalog order
    assert_eq!(featured, vec!["10", "1"]);

    let recent: Vec<&str> = catalog.most_recent(6).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(recent, vec!["10", "1", "4", "2", "5", "3"]);

    assert_eq!(catalog.most_recent(100).len(), catalog.len());
}
