//! Free-text search over the sample catalog

mod common;

use common::*;
use groupie_tracker::models::Category;
use groupie_tracker::search::{CapPolicy, QueryEngine, SearchConfigBuilder};
use groupie_tracker::state::Snapshot;

fn summary(engine: &QueryEngine, snapshot: &Snapshot, query: &str) -> Vec<(Category, u32, String)> {
    engine
        .search(snapshot, query)
        .into_iter()
        .map(|r| (r.category, r.id, r.name))
        .collect()
}

#[test]
fn test_artist_prefix_comes_first() {
    let results = QueryEngine::default().search(&sample_snapshot(), "que");

    assert!(!results.is_empty());
    assert_eq!(results[0].category, Category::Artist);
    assert_eq!(results[0].name, "Queen");
    assert_eq!(results[0].qualifier, "artist/band");
}

#[test]
fn test_member_hit_names_its_band() {
    let results = QueryEngine::default().search(&sample_snapshot(), "fred");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].category, Category::Member);
    assert_eq!(results[0].name, "Freddie");
    assert_eq!(results[0].qualifier, "member of Queen");
    assert_eq!(results[0].id, 1);
}

#[test]
fn test_search_is_case_insensitive() {
    let engine = QueryEngine::default();
    let snapshot = sample_snapshot();

    assert_eq!(engine.search(&snapshot, "QUEEN"), engine.search(&snapshot, "queen"));
    assert_eq!(engine.search(&snapshot, "  queen "), engine.search(&snapshot, "queen"));
}

#[test]
fn test_results_follow_pass_order() {
    let got = summary(&QueryEngine::default(), &sample_snapshot(), "ro");

    assert_eq!(
        got,
        vec![
            (Category::Member, 2, "Roger Waters".to_string()),
            (Category::Member, 3, "Ron Wood".to_string()),
            (Category::Artist, 3, "The Rolling Stones".to_string()),
            (Category::Location, 3, "toronto-canada".to_string()),
            (Category::Location, 4, "detroit-usa".to_string()),
        ]
    );
}

#[test]
fn test_prefix_hits_precede_contains_hits_per_category() {
    let snapshot = Snapshot::new(
        vec![
            artist(1, "Alpha", &["Quentin", "Mr Quest"], 1980, "01-01-1981"),
            artist(2, "Queen", &["Freddie"], 1970, "14-12-1973"),
            artist(3, "Big Queens", &["Josh"], 1995, "06-06-1998"),
        ],
        vec![
            location_set(1, &["quebec-canada"]),
            location_set(2, &["london-uk"]),
            location_set(3, &["palm_desert-usa"]),
        ],
    );

    let got = summary(&QueryEngine::default(), &snapshot, "que");

    assert_eq!(
        got,
        vec![
            (Category::Artist, 2, "Queen".to_string()),
            (Category::Member, 1, "Quentin".to_string()),
            (Category::Artist, 3, "Big Queens".to_string()),
            (Category::Member, 1, "Mr Quest".to_string()),
            (Category::Location, 1, "quebec-canada".to_string()),
        ]
    );
}

#[test]
fn test_founding_year_prefix() {
    let got = summary(&QueryEngine::default(), &sample_snapshot(), "19");

    let ids: Vec<u32> = got.iter().map(|(_, id, _)| *id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(got.iter().all(|(category, _, _)| *category == Category::CreationDate));
    assert_eq!(got[1].2, "1965");
}

#[test]
fn test_no_match_and_blank_query() {
    let engine = QueryEngine::default();
    let snapshot = sample_snapshot();

    assert!(engine.search(&snapshot, "zzzz").is_empty());
    assert!(engine.search(&snapshot, "").is_empty());
    assert!(engine.search(&Snapshot::empty(), "queen").is_empty());
}

#[test]
fn test_cap_policies_on_large_catalog() {
    let artists: Vec<_> = (1..=40)
        .map(|id| artist(id, &format!("Echo {}", id), &["Echo Singer"], 2001, "02-02-2002"))
        .collect();
    let locations: Vec<_> = (1..=40).map(|id| location_set(id, &["echo-bay"])).collect();
    let snapshot = Snapshot::new(artists, locations);

    let legacy = QueryEngine::default().search(&snapshot, "echo");
    assert_eq!(legacy.len(), 17);

    let strict = QueryEngine::new(
        SearchConfigBuilder::new()
            .cap_policy(CapPolicy::Strict)
            .build(),
    )
    .search(&snapshot, "echo");
    assert_eq!(strict.len(), 16);

    let small = QueryEngine::new(
        SearchConfigBuilder::new()
            .result_cap(3)
            .cap_policy(CapPolicy::Strict)
            .build(),
    )
    .search(&snapshot, "echo");
    assert_eq!(small.len(), 3);
}

#[test]
fn test_results_serialize_type_field() {
    let results = QueryEngine::default().search(&sample_snapshot(), "fred");
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json[0]["type"], "member of Queen");
    assert_eq!(json[0]["category"], "member");
    assert_eq!(json[0]["id"], 1);
}
