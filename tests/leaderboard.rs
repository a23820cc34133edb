use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};

use score_predictor::catalog::FixtureCatalog;
use score_predictor::handle_import;
use score_predictor::domain::{Fixture, FixtureKey, LeaderboardEntry, Prediction};
use score_predictor::scoring::{Aggregator, build_leaderboard, default_round, is_round_locked};
use score_predictor::store::{FileStore, PredictionStore};

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn load() -> (FixtureCatalog, PredictionStore) {
    let catalog =
        FixtureCatalog::load(&fixture_path("fixtures.json")).expect("catalog should load");
    let store = FileStore::new(fixture_path("predictions.json"))
        .load()
        .expect("store should load");
    (catalog, store)
}

fn september_first() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn single_fixture_catalog(result: Option<(i64, i64)>) -> FixtureCatalog {
    FixtureCatalog::new(vec![Fixture {
        key: FixtureKey::new(1, 0),
        home_team: "A".to_string(),
        away_team: "B".to_string(),
        kickoff: None,
        location: String::new(),
        home_score: result.map(|r| r.0),
        away_score: result.map(|r| r.1),
    }])
}

fn single_prediction_store(home: i64, away: i64) -> PredictionStore {
    let mut store = PredictionStore::new();
    let round = [(0, Prediction::new(home, away))].into_iter().collect();
    store.replace_round("player", 1, round);
    store
}

#[test]
fn catalog_rows_load_with_trimmed_columns() {
    let (catalog, _) = load();
    assert_eq!(catalog.len(), 8);
    assert_eq!(catalog.rounds(), vec![1, 2, 3, 4]);

    let chelsea_home = catalog.get(FixtureKey::new(2, 3)).unwrap();
    assert_eq!(chelsea_home.home_team, "Chelsea");
    assert_eq!(chelsea_home.result(), Some((3, 1)));
    assert!(chelsea_home.kickoff.is_some());

    assert!(catalog.get(FixtureKey::new(3, 6)).unwrap().kickoff.is_none());
}

#[test]
fn imported_database_matches_json_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let database = dir.path().join("fixtures.db");
    handle_import(&fixture_path("fixtures.json"), &database).unwrap();

    let (from_json, _) = load();
    let from_sqlite = FixtureCatalog::load(&database).unwrap();
    assert_eq!(
        from_sqlite.fixtures().collect::<Vec<_>>(),
        from_json.fixtures().collect::<Vec<_>>()
    );
    assert!(handle_import(&fixture_path("fixtures.json"), &database).is_err());
}

#[test]
fn leaderboard_matches_hand_computed_totals() {
    let (catalog, store) = load();
    let board = build_leaderboard(&catalog, &store);

    assert_eq!(
        board["Shezza"],
        LeaderboardEntry {
            exact_scores: 1,
            correct_results: 3,
            total_points: 9
        }
    );
    assert_eq!(
        board["Stiggsy"],
        LeaderboardEntry {
            exact_scores: 1,
            correct_results: 2,
            total_points: 7
        }
    );
    assert_eq!(board["Lil Wheezy"], LeaderboardEntry::default());
    assert_eq!(board["Kawazy J"], LeaderboardEntry::default());
    assert_eq!(board.len(), 4);
}

#[test]
fn ranked_leaderboard_orders_ties_by_name() {
    let (catalog, store) = load();
    let ranked = Aggregator::new(&catalog, &store).ranked();

    let order: Vec<_> = ranked
        .iter()
        .map(|r| (r.rank, r.player.as_str(), r.total_points))
        .collect();
    assert_eq!(
        order,
        vec![
            (1, "Shezza", 9),
            (2, "Stiggsy", 7),
            (3, "Kawazy J", 0),
            (4, "Lil Wheezy", 0),
        ]
    );
}

#[test]
fn breakdowns_sum_to_leaderboard_totals() {
    let (catalog, store) = load();
    let aggregator = Aggregator::new(&catalog, &store);

    let shezza = aggregator.player_breakdown("Shezza");
    assert_eq!(shezza.rounds.get(&1), Some(&7));
    assert_eq!(shezza.rounds.get(&2), Some(&2));

    let stiggsy = aggregator.player_breakdown("Stiggsy");
    assert!(!stiggsy.rounds.contains_key(&3), "pending round must be left out");

    for (player, entry) in aggregator.leaderboard() {
        let breakdown = aggregator.player_breakdown(&player);
        assert_eq!(entry.total_points, breakdown.rounds.values().sum::<i64>());
        assert_eq!(entry.total_points, breakdown.total_points);
    }
}

#[test]
fn round_locks_follow_first_kickoff() {
    let (catalog, _) = load();
    let now = september_first();

    assert!(is_round_locked(&catalog, 1, now));
    assert!(is_round_locked(&catalog, 2, now));
    assert!(!is_round_locked(&catalog, 3, now));
    assert!(!is_round_locked(&catalog, 4, now), "undated round stays open");
    assert!(!is_round_locked(&catalog, 99, now), "unknown round stays open");
    assert_eq!(default_round(&catalog, now), Some(3));
}

#[test]
fn exact_prediction_scores_five() {
    let catalog = single_fixture_catalog(Some((2, 1)));
    let board = build_leaderboard(&catalog, &single_prediction_store(2, 1));
    assert_eq!(
        board["player"],
        LeaderboardEntry {
            exact_scores: 1,
            correct_results: 1,
            total_points: 5
        }
    );
}

#[test]
fn matching_outcome_scores_two() {
    let catalog = single_fixture_catalog(Some((2, 1)));
    let board = build_leaderboard(&catalog, &single_prediction_store(3, 0));
    assert_eq!(
        board["player"],
        LeaderboardEntry {
            exact_scores: 0,
            correct_results: 1,
            total_points: 2
        }
    );
}

#[test]
fn unplayed_fixture_contributes_nothing() {
    let catalog = single_fixture_catalog(None);
    let store = single_prediction_store(2, 1);
    let aggregator = Aggregator::new(&catalog, &store);

    assert_eq!(aggregator.leaderboard()["player"], LeaderboardEntry::default());
    assert!(aggregator.player_breakdown("player").rounds.is_empty());
}
