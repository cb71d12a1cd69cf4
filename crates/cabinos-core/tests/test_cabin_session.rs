//! Integration tests for a full cabin session.
//!
//! Exercises: FlightConfig → SeatMap → selection → luggage → packing
//! → forecast → conflict advice → snapshot
//!
//! All tests are pure logic - no UI shell, no camera, no storage.

use cabinos_core::config::FlightConfig;
use cabinos_core::engine::CabinEngine;
use cabinos_core::error::CabinError;
use cabinos_core::generation::generate_seat_map;
use cabinos_core::prelude::*;
use cabinos_core::systems::forecast::HISTORY_CAPACITY;
use cabinos_core::systems::{
    ConflictScenario, ForecastEngine, LuggageManifest, NewLuggage, SeatMap, SwapAdvisor,
};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Helpers ────────────────────────────────────────────────────────────

fn two_by_two() -> FlightConfig {
    FlightConfig {
        flight_id: "OS-TEST".to_string(),
        rows: 2,
        columns: vec![Column::A, Column::B],
        bins: 2,
        premium_rows: vec![1],
        exit_rows: vec![],
        ..Default::default()
    }
}

/// Random source whose Bernoulli draws never succeed, so every seat is free
fn all_free() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn selected_ids(map: &SeatMap) -> Vec<String> {
    map.seats()
        .iter()
        .filter(|s| s.status() == SeatStatus::Selected)
        .map(|s| s.id.to_string())
        .collect()
}

fn status_of(map: &SeatMap, label: &str) -> SeatStatus {
    map.seat_by_label(label).unwrap().status()
}

// ── Seat selection ─────────────────────────────────────────────────────

#[test]
fn selection_moves_between_seats() {
    let mut map = generate_seat_map(&two_by_two(), &mut all_free()).unwrap();

    map.select_by_label("1A").unwrap().expect("1A is free");
    map.select_by_label("1B").unwrap().expect("1B is free");

    assert_eq!(selected_ids(&map), vec!["1B"]);
    assert_eq!(status_of(&map, "1A"), SeatStatus::Available);
}

#[test]
fn single_selection_survives_random_clicks() {
    let mut rng = StdRng::seed_from_u64(31);
    let config = FlightConfig::default();
    let mut map = generate_seat_map(&config, &mut rng).unwrap();
    let labels: Vec<String> = map.seats().iter().map(|s| s.id.to_string()).collect();

    for _ in 0..500 {
        let label = &labels[rng.gen_range(0..labels.len())];
        map.select_by_label(label).unwrap();
        assert!(selected_ids(&map).len() <= 1);
        let stats = map.stats();
        assert_eq!(stats.occupied + stats.available, stats.total);
    }
}

#[test]
fn occupied_seat_selection_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut map = generate_seat_map(&FlightConfig::default(), &mut rng).unwrap();
    let free = map
        .seats()
        .iter()
        .find(|s| s.is_available())
        .map(|s| s.id)
        .unwrap();
    let taken = map
        .seats()
        .iter()
        .find(|s| s.status() == SeatStatus::Occupied)
        .map(|s| s.id)
        .unwrap();

    map.select_seat(&free).unwrap();
    let before: Vec<SeatStatus> = map.seats().iter().map(|s| s.status()).collect();

    assert!(map.select_seat(&taken).unwrap().is_none());

    let after: Vec<SeatStatus> = map.seats().iter().map(|s| s.status()).collect();
    assert_eq!(before, after);
}

#[test]
fn unknown_seat_is_an_error_not_a_noop() {
    let mut engine = CabinEngine::with_seed(two_by_two(), 3).unwrap();
    assert_eq!(
        engine.select_seat("7C").unwrap_err(),
        CabinError::SeatNotFound("7C".to_string())
    );
}

// ── Luggage & packing ──────────────────────────────────────────────────

#[test]
fn packing_is_a_sorted_view_of_the_manifest() {
    let mut engine = CabinEngine::with_seed(FlightConfig::default(), 12).unwrap();
    for _ in 0..4 {
        engine.add_random_bag().unwrap();
    }
    let stored: Vec<LuggageItem> = engine.luggage().items().to_vec();

    let packed = engine.optimize_packing();

    assert_eq!(engine.luggage().items(), &stored[..]);
    assert_eq!(packed.len(), stored.len());
    for (rank, p) in packed.iter().enumerate() {
        assert_eq!(p.rank, rank);
        assert!(stored.contains(&p.item));
    }
    for pair in packed.windows(2) {
        assert!(pair[0].item.volume() >= pair[1].item.volume());
    }
    assert_eq!(packed[0].hint, PackingHint::AgainstWall);
}

#[test]
fn capacity_rises_then_saturates() {
    let mut manifest = LuggageManifest::new(BinCapacity::default(), "12A");
    let mut engine = CabinEngine::from_parts(
        two_by_two(),
        generate_seat_map(&two_by_two(), &mut all_free()).unwrap(),
        manifest.clone(),
        ForecastEngine::default(),
        SwapAdvisor::default(),
        StdRng::seed_from_u64(5),
    );
    assert_eq!(engine.capacity_pct(), 0);

    let mut last = 0;
    for _ in 0..10 {
        let roller = Dimensions::new(22.0, 14.0, 9.0);
        engine
            .add_luggage_item("Roller", roller, 18.0, Some(Material::Hardshell))
            .unwrap();
        let pct = engine.capacity_pct();
        assert!(pct >= last);
        last = pct;
    }
    assert_eq!(last, 100);

    // the manifest handed in was copied, not shared
    assert!(manifest.is_empty());
    manifest
        .add_item(NewLuggage {
            label: "Tote".into(),
            dims: Dimensions::new(10.0, 10.0, 4.0),
            weight_lbs: 3.0,
            material: None,
            confidence_pct: 80,
        })
        .unwrap();
    assert_eq!(engine.luggage().len(), 10);
}

#[test]
fn invalid_bag_is_rejected_without_side_effects() {
    let mut engine = CabinEngine::with_seed(FlightConfig::default(), 1).unwrap();
    let before = engine.luggage().len();
    let err = engine
        .add_luggage_item("Flat", Dimensions::new(10.0, 0.0, 4.0), 5.0, None)
        .unwrap_err();
    assert!(matches!(err, CabinError::InvalidDimension { field: "width", .. }));
    assert_eq!(engine.luggage().len(), before);
}

// ── Forecast ───────────────────────────────────────────────────────────

#[test]
fn forecast_has_five_bounded_points() {
    let mut engine = CabinEngine::with_seed(FlightConfig::default(), 99).unwrap();
    let points = engine.forecast_default();
    assert_eq!(points.len(), 5);
    assert!(points.iter().all(|&p| p <= 100));
}

#[test]
fn history_stays_bounded() {
    let mut engine = CabinEngine::with_seed(FlightConfig::default(), 2).unwrap();
    for i in 0..120 {
        engine.add_data_point(i as f64);
    }
    let history = engine.forecaster().history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history.oldest(), Some((120 - HISTORY_CAPACITY) as f64));
    assert_eq!(history.latest(), Some(119.0));
}

#[test]
fn full_history_forecast_saturates() {
    let mut engine = CabinEngine::with_seed(FlightConfig::default(), 2).unwrap();
    for _ in 0..HISTORY_CAPACITY {
        engine.add_data_point(99.0);
    }
    let points = engine.forecast(5);
    assert_eq!(&points[1..], &[100, 100, 100, 100]);
}

// ── Conflicts ──────────────────────────────────────────────────────────

#[test]
fn swaps_follow_the_active_scenario() {
    let mut engine = CabinEngine::with_seed(FlightConfig::default(), 4).unwrap();
    let mut scenario = ConflictScenario::demo();
    scenario.seat = "15C".parse().unwrap();
    engine.set_conflict(scenario);

    let case = engine.find_conflict().unwrap();
    assert_eq!(case.seat.to_string(), "15C");

    let swaps = engine.suggest_swaps().unwrap();
    assert!(!swaps.is_empty());
    for s in &swaps {
        assert_eq!(s.pair.0.to_string(), "15C");
        assert!(engine.seats().seat(&s.pair.1).unwrap().is_available());
    }
    for pair in swaps.windows(2) {
        let ordered = pair[0].score > pair[1].score
            || (pair[0].score == pair[1].score && pair[0].pair.1 < pair[1].pair.1);
        assert!(ordered);
    }
}

#[test]
fn swaps_skip_the_current_selection() {
    let mut engine = CabinEngine::from_parts(
        FlightConfig {
            rows: 6,
            ..two_by_two()
        },
        generate_seat_map(
            &FlightConfig {
                rows: 6,
                ..two_by_two()
            },
            &mut all_free(),
        )
        .unwrap(),
        LuggageManifest::new(BinCapacity::default(), "1A"),
        ForecastEngine::default(),
        SwapAdvisor::new(Default::default(), 100),
        StdRng::seed_from_u64(0),
    );
    engine.select_seat("4A").unwrap();

    let swaps = engine.suggest_swaps().unwrap();
    assert_eq!(swaps.len(), 10);
    assert!(swaps.iter().all(|s| s.pair.1.to_string() != "4A"));
}

// ── Snapshot ───────────────────────────────────────────────────────────

#[test]
fn snapshot_reflects_latest_state() {
    let mut engine = CabinEngine::with_seed(FlightConfig::default(), 6).unwrap();
    let first = engine.snapshot();

    engine.add_random_bag().unwrap();
    let free = engine
        .seats()
        .seats()
        .iter()
        .find(|s| s.is_available())
        .map(|s| s.id.to_string())
        .unwrap();
    engine.select_seat(&free).unwrap();

    let second = engine.snapshot();
    assert_eq!(second.luggage.len(), first.luggage.len() + 1);
    assert_eq!(second.seats.occupied, first.seats.occupied + 1);
    assert_eq!(second.selected_seat.map(|s| s.to_string()), Some(free));
    assert!(second.capacity_pct >= first.capacity_pct);
}

#[test]
fn snapshot_json_round_trips() {
    let mut engine = CabinEngine::with_seed(FlightConfig::default(), 10).unwrap();
    let json = engine.snapshot_json().unwrap();
    let back: DashboardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.flight_id, "OS-2026");
    assert_eq!(back.packing.len(), 3);
}
