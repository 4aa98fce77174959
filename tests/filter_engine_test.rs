//! Integration tests for filtering and ranking through the public API

use player_scout::{
    core::parse_market_value,
    filters::{self, active_filters, FilterCriteria},
    ContractFilter, MarketValueBucket, Player, PlayerStore,
};
use serde_json::json;

fn roster() -> Vec<Player> {
    serde_json::from_value(json!([
        {"id": "1", "name": "Nico Williams", "club": "Athletic Bilbao", "league": "LaLiga",
         "position": "Left Winger", "nationality": "Spain", "market_value": "€70.00m",
         "percentile": 90, "age": 22, "height": 181, "foot": "right", "contract": "30.06.2035"},
        {"id": "2", "name": "Adrien Rabiot", "club": "Marseille", "league": "Ligue 1",
         "position": "Central Midfield", "nationality": "France", "market_value": "€20.00m",
         "percentile": 55, "age": 30, "height": 188, "foot": "left", "contract": "30.06.2026"},
        {"id": "3", "name": "Kevin De Bruyne", "club": "Napoli", "league": "Serie A",
         "position": "Attacking Midfield", "nationality": "Belgium", "market_value": "€15.00m",
         "percentile": 70, "age": 34, "height": 181, "foot": "right", "contract": "30.06.2027"},
        {"id": "4", "name": "Youth Prospect", "club": "", "league": "",
         "position": "Goalkeeper", "nationality": "Spain", "market_value": "€500k",
         "percentile": 39, "contract": "Free agent"}
    ]))
    .unwrap()
}

fn ids(players: &[Player]) -> Vec<&str> {
    players.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_empty_criteria_sorted_by_percentile() {
    let players = filters::apply(&roster(), &FilterCriteria::default());
    assert_eq!(ids(&players), vec!["1", "3", "2", "4"]);
}

#[test]
fn test_apply_is_idempotent() {
    let criteria = FilterCriteria {
        search: "spain".to_string(),
        ..FilterCriteria::default()
    };
    let once = filters::apply(&roster(), &criteria);
    let twice = filters::apply(&once, &criteria);
    assert_eq!(once, twice);
}

#[test]
fn test_each_bucket_selects_one_player() {
    let cases = [
        (MarketValueBucket::Elite, "1"),
        (MarketValueBucket::High, "3"),
        (MarketValueBucket::Medium, "2"),
        (MarketValueBucket::Low, "4"),
    ];
    for (bucket, expected) in cases {
        let criteria = FilterCriteria {
            market_value_bucket: Some(bucket),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filters::apply(&roster(), &criteria)), vec![expected]);
    }
}

#[test]
fn test_combined_criteria() {
    let criteria = FilterCriteria {
        foot: "right".to_string(),
        max_market_value: Some(50.0),
        min_age: Some(30),
        contract: Some(ContractFilter::ExpiresIn("2027".to_string())),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filters::apply(&roster(), &criteria)), vec!["3"]);
    assert_eq!(active_filters(&criteria).len(), 4);
}

#[test]
fn test_missing_age_counts_as_zero() {
    let criteria = FilterCriteria {
        max_age: Some(18),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filters::apply(&roster(), &criteria)), vec!["4"]);
}

#[test]
fn test_market_value_examples() {
    assert_eq!(parse_market_value("€12.50m"), 12.5);
    assert_eq!(parse_market_value("500k"), 0.5);
    assert_eq!(parse_market_value("1000000"), 1.0);
    assert_eq!(parse_market_value(""), 0.0);
}

#[test]
fn test_store_view_follows_favorite_updates() {
    let mut store = PlayerStore::new();
    store.load(roster()).unwrap();

    let criteria = FilterCriteria {
        favorites_only: true,
        ..FilterCriteria::default()
    };
    assert_eq!(store.refilter(&criteria), 0);

    store.apply_favorite(&"2".into(), true).unwrap();
    assert_eq!(store.refilter(&criteria), 1);
    assert!(store.visible()[0].favorite);
}
