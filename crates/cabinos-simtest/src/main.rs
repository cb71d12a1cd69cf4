//! Cabin OS Headless Harness
//!
//! Drives the cabin core end-to-end without any UI shell.
//! Runs entirely in-process: no camera, no voice input, no rendering.
//!
//! Usage:
//!   cargo run -p cabinos-simtest
//!   cargo run -p cabinos-simtest -- --verbose
//!   RUST_LOG=debug cargo run -p cabinos-simtest

use cabinos_core::config::{validate_config, ConfigError, FlightConfig};
use cabinos_core::error::CabinError;
use cabinos_core::generation::generate_seat_map;
use cabinos_core::prelude::*;
use cabinos_core::systems::forecast::HISTORY_CAPACITY;
use cabinos_core::systems::{carry_on_compliance, weight_status, Compliance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Flight configuration (same JSON a shell would load) ─────────────────
const FLIGHT_JSON: &str = include_str!("../../../data/flight_config.json");

/// Seeds swept by the randomized sections
const SEEDS: [u64; 8] = [1, 2, 3, 5, 8, 13, 21, 34];

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Cabin OS Harness ===\n");

    let config = match FlightConfig::from_json(FLIGHT_JSON) {
        Ok(c) => c,
        Err(e) => {
            println!("  ✗ config_parse: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded flight {} ({}, {} seats)",
        config.flight_id,
        config.layout,
        config.seat_count()
    );

    let mut results = Vec::new();

    // 1. Flight configuration
    results.extend(validate_flight_config(&config, verbose));

    // 2. Seat inventory & selection sweep
    results.extend(validate_seat_inventory(&config, verbose));

    // 3. Luggage manifest & packing
    results.extend(validate_luggage(&config, verbose));

    // 4. Capacity forecast
    results.extend(validate_forecast(&config, verbose));

    // 5. Conflict advisor
    results.extend(validate_advisor(&config, verbose));

    // 6. Dashboard snapshot
    results.extend(validate_snapshot(&config, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Flight Configuration ─────────────────────────────────────────────

fn validate_flight_config(config: &FlightConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Flight Configuration ---");
    let mut results = Vec::new();

    results.push(TestResult::new(
        "config_matches_default",
        *config == FlightConfig::default(),
        format!("{} rows x {} columns", config.rows, config.columns.len()),
    ));

    results.push(TestResult::new(
        "config_seat_count",
        config.seat_count() == 180,
        format!("{} seats", config.seat_count()),
    ));

    // Every problem is reported, not just the first
    let broken = FlightConfig {
        flight_id: " ".to_string(),
        rows: 0,
        columns: vec![],
        exit_rows: vec![40],
        ..Default::default()
    };
    let errors = validate_config(&broken);
    results.push(TestResult::new(
        "config_collects_errors",
        errors.contains(&ConfigError::EmptyFlightId)
            && errors.contains(&ConfigError::NoRows)
            && errors.contains(&ConfigError::NoColumns)
            && errors.contains(&ConfigError::ExitRowOutOfRange(40)),
        format!("{} errors", errors.len()),
    ));

    let malformed = FlightConfig::from_json("{ \"rows\": \"thirty\" }");
    results.push(TestResult::new(
        "config_rejects_malformed_json",
        matches!(
            malformed,
            Err(CabinError::Configuration(ref e))
                if e.len() == 1 && matches!(e[0], ConfigError::Malformed(_))
        ),
        match &malformed {
            Err(e) => e.to_string(),
            Ok(_) => "accepted".to_string(),
        },
    ));

    if verbose {
        println!("  flight {} on a {}", config.flight_id, config.layout);
    }

    results
}

// ── 2. Seat Inventory ───────────────────────────────────────────────────

fn validate_seat_inventory(config: &FlightConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Seat Inventory ---");
    let mut results = Vec::new();

    let mut count_violations = 0;
    let mut selection_violations = 0;
    let mut occupied_changes = 0;
    let mut fill_total = 0;

    for &seed in &SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut map = match generate_seat_map(config, &mut rng) {
            Ok(m) => m,
            Err(e) => {
                results.push(TestResult::new("seat_generation", false, e.to_string()));
                return results;
            }
        };
        fill_total += map.stats().fill_pct;

        let ids: Vec<SeatId> = map.seats().iter().map(|s| s.id).collect();
        for _ in 0..200 {
            let id = ids[rng.gen_range(0..ids.len())];
            let was_occupied = map
                .seat(&id)
                .map(|s| s.status() == SeatStatus::Occupied)
                .unwrap_or(false);
            let before: Vec<SeatStatus> = map.seats().iter().map(|s| s.status()).collect();

            let outcome = map.select_seat(&id).map(|seat| seat.is_some());
            match outcome {
                Ok(false) if was_occupied => {
                    let after: Vec<SeatStatus> = map.seats().iter().map(|s| s.status()).collect();
                    if before != after {
                        occupied_changes += 1;
                    }
                }
                Ok(true) if !was_occupied => {}
                _ => selection_violations += 1,
            }

            let selected = map
                .seats()
                .iter()
                .filter(|s| s.status() == SeatStatus::Selected)
                .count();
            if selected > 1 {
                selection_violations += 1;
            }
            let stats = map.stats();
            if stats.occupied + stats.available != stats.total || stats.total != ids.len() {
                count_violations += 1;
            }
        }
    }

    results.push(TestResult::new(
        "seat_counts_consistent",
        count_violations == 0,
        format!("{} violations over {} seeds", count_violations, SEEDS.len()),
    ));
    results.push(TestResult::new(
        "seat_single_selection",
        selection_violations == 0,
        format!("{} violations over {} clicks", selection_violations, SEEDS.len() * 200),
    ));
    results.push(TestResult::new(
        "seat_occupied_is_noop",
        occupied_changes == 0,
        format!("{} occupied clicks changed state", occupied_changes),
    ));

    // Occupancy probability 0.45 should land the mean fill well inside 30..60
    let mean_fill = fill_total / SEEDS.len() as u32;
    results.push(TestResult::new(
        "seat_mean_fill",
        (30..=60).contains(&mean_fill),
        format!("mean initial fill {}%", mean_fill),
    ));

    let mut engine = match CabinEngine::with_seed(config.clone(), 1) {
        Ok(e) => e,
        Err(e) => {
            results.push(TestResult::new("seat_engine", false, e.to_string()));
            return results;
        }
    };
    let unknown = engine.select_seat("99Z");
    results.push(TestResult::new(
        "seat_unknown_label",
        matches!(unknown, Err(ref e) if e.is_not_found()),
        format!("{:?}", unknown.map(|s| s.map(|s| s.id))),
    ));

    // Feature derivation on the default layout
    let features_ok = engine.seats().seats().iter().all(|s| {
        s.has_feature(SeatFeature::Window) == s.column().is_window()
            && s.has_feature(SeatFeature::Aisle) == s.column().is_aisle()
            && s.is_premium() == config.is_premium_row(s.row())
            && s.has_feature(SeatFeature::ExitRow) == config.is_exit_row(s.row())
            && (1..=config.bins).contains(&s.bin_proximity.0)
            && (1..=config.bins).contains(&s.bin_proximity.1)
    });
    results.push(TestResult::new(
        "seat_features_derived",
        features_ok,
        "window, aisle, premium, exit row and bin proximity",
    ));

    if verbose {
        let stats = engine.stats();
        println!(
            "  seed 1: {}/{} seats taken ({}%)",
            stats.occupied, stats.total, stats.fill_pct
        );
    }

    results
}

// ── 3. Luggage & Packing ────────────────────────────────────────────────

fn validate_luggage(config: &FlightConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Luggage & Packing ---");
    let mut results = Vec::new();

    let mut engine = match CabinEngine::with_seed(config.clone(), 2) {
        Ok(e) => e,
        Err(e) => {
            results.push(TestResult::new("luggage_engine", false, e.to_string()));
            return results;
        }
    };

    results.push(TestResult::new(
        "luggage_starter_capacity",
        engine.luggage().len() == 3 && engine.capacity_pct() == 47,
        format!(
            "{} bags, {}% used",
            engine.luggage().len(),
            engine.capacity_pct()
        ),
    ));

    let bands = [
        (10.0, WeightStatus::Green),
        (15.0, WeightStatus::Green),
        (15.5, WeightStatus::Amber),
        (25.0, WeightStatus::Amber),
        (25.5, WeightStatus::Red),
    ];
    let band_errors: Vec<String> = bands
        .iter()
        .filter(|(w, expected)| weight_status(*w) != *expected)
        .map(|(w, _)| format!("{} lbs", w))
        .collect();
    results.push(TestResult::new(
        "luggage_weight_bands",
        band_errors.is_empty(),
        if band_errors.is_empty() {
            "green/amber/red boundaries hold".to_string()
        } else {
            format!("misclassified: {}", band_errors.join(", "))
        },
    ));

    results.push(TestResult::new(
        "luggage_carry_on_limit",
        carry_on_compliance(&Dimensions::new(22.0, 14.0, 9.0)) == Compliance::CarryOnOk
            && carry_on_compliance(&Dimensions::new(22.0, 14.5, 9.0)) == Compliance::GateCheck,
        "22x14x9 fits, 22x14.5x9 does not",
    ));

    let rejected = engine.add_luggage_item("Ghost", Dimensions::new(-1.0, 10.0, 5.0), 4.0, None);
    results.push(TestResult::new(
        "luggage_rejects_bad_dims",
        matches!(rejected, Err(CabinError::InvalidDimension { .. })) && engine.luggage().len() == 3,
        "negative height refused",
    ));

    // Quick-add until the bin saturates, checking monotone capacity and packing
    let mut last_pct = engine.capacity_pct();
    let mut monotone = true;
    let mut order_ok = true;
    for _ in 0..12 {
        if engine.add_random_bag().is_err() {
            monotone = false;
            break;
        }
        let pct = engine.capacity_pct();
        monotone &= pct >= last_pct && pct + engine.remaining_pct() == 100;
        last_pct = pct;

        let packed = engine.optimize_packing();
        order_ok &= packed.len() == engine.luggage().len()
            && packed
                .windows(2)
                .all(|p| p[0].item.volume() >= p[1].item.volume());
    }
    results.push(TestResult::new(
        "luggage_capacity_monotone",
        monotone && last_pct == 100,
        format!("{} bags reach {}%", engine.luggage().len(), last_pct),
    ));
    results.push(TestResult::new(
        "packing_largest_first",
        order_ok,
        "packing order is by descending volume",
    ));

    let packed = engine.optimize_packing();
    let hints_ok = packed.iter().all(|p| {
        let expected = match p.rank {
            0 => PackingHint::AgainstWall,
            1 => PackingHint::StackFlat,
            _ => PackingHint::FillRemaining,
        };
        p.hint == expected
    });
    results.push(TestResult::new(
        "packing_hints_by_rank",
        hints_ok,
        format!("{} placements", packed.len()),
    ));

    if verbose {
        for p in packed.iter().take(3) {
            println!(
                "  #{} {} ({:.0} cu in): {}",
                p.rank + 1,
                p.item.label,
                p.item.volume(),
                p.hint
            );
        }
    }

    results
}

// ── 4. Capacity Forecast ────────────────────────────────────────────────

fn validate_forecast(config: &FlightConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Capacity Forecast ---");
    let mut results = Vec::new();

    let mut shape_errors = 0;
    for &seed in &SEEDS {
        let mut engine = match CabinEngine::with_seed(config.clone(), seed) {
            Ok(e) => e,
            Err(_) => {
                shape_errors += 1;
                continue;
            }
        };
        let points = engine.forecast_default();
        if points.len() != 5 || points.iter().any(|&p| p > 100) {
            shape_errors += 1;
        }
        if verbose && seed == SEEDS[0] {
            println!("  seed {}: forecast {:?}", seed, points);
        }
    }
    results.push(TestResult::new(
        "forecast_shape",
        shape_errors == 0,
        format!("{} bad forecasts over {} seeds", shape_errors, SEEDS.len()),
    ));

    let mut engine = match CabinEngine::with_seed(config.clone(), 9) {
        Ok(e) => e,
        Err(e) => {
            results.push(TestResult::new("forecast_engine", false, e.to_string()));
            return results;
        }
    };
    for i in 0..(HISTORY_CAPACITY * 2) {
        engine.add_data_point(i as f64);
    }
    engine.add_data_point(f64::NAN);
    let history = engine.forecaster().history();
    results.push(TestResult::new(
        "forecast_history_capped",
        history.len() == HISTORY_CAPACITY
            && history.latest() == Some((HISTORY_CAPACITY * 2 - 1) as f64),
        format!("{} samples retained", history.len()),
    ));

    results.push(TestResult::new(
        "forecast_custom_horizon",
        engine.forecast(0).is_empty() && engine.forecast(12).len() == 12,
        "0 and 12 periods",
    ));

    results
}

// ── 5. Conflict Advisor ─────────────────────────────────────────────────

fn validate_advisor(config: &FlightConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Conflict Advisor ---");
    let mut results = Vec::new();

    let mut ranking_errors = 0;
    let mut availability_errors = 0;
    let mut demo_score = None;

    for &seed in &SEEDS {
        let engine = match CabinEngine::with_seed(config.clone(), seed) {
            Ok(e) => e,
            Err(_) => {
                ranking_errors += 1;
                continue;
            }
        };
        match engine.find_conflict() {
            Ok(case) => demo_score = Some(case.compatibility_score),
            Err(_) => ranking_errors += 1,
        }
        let swaps = match engine.suggest_swaps() {
            Ok(s) => s,
            Err(_) => {
                ranking_errors += 1;
                continue;
            }
        };
        if swaps.len() > 3 || swaps.windows(2).any(|p| p[0].score < p[1].score) {
            ranking_errors += 1;
        }
        availability_errors += swaps
            .iter()
            .filter(|s| {
                !engine
                    .seats()
                    .seat(&s.pair.1)
                    .map(|seat| seat.is_available())
                    .unwrap_or(false)
            })
            .count();

        if verbose && seed == SEEDS[0] {
            for s in &swaps {
                println!("  {} -> {} ({}): {}", s.pair.0, s.pair.1, s.score, s.benefit);
            }
        }
    }

    results.push(TestResult::new(
        "advisor_demo_score",
        demo_score == Some(72),
        format!("compatibility {:?}", demo_score),
    ));
    results.push(TestResult::new(
        "advisor_ranking",
        ranking_errors == 0,
        format!("{} ranking errors over {} seeds", ranking_errors, SEEDS.len()),
    ));
    results.push(TestResult::new(
        "advisor_only_free_seats",
        availability_errors == 0,
        format!("{} suggestions pointed at taken seats", availability_errors),
    ));

    results
}

// ── 6. Dashboard Snapshot ───────────────────────────────────────────────

fn validate_snapshot(config: &FlightConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Dashboard Snapshot ---");
    let mut results = Vec::new();

    let mut engine = match CabinEngine::with_seed(config.clone(), 3) {
        Ok(e) => e,
        Err(e) => {
            results.push(TestResult::new("snapshot_engine", false, e.to_string()));
            return results;
        }
    };

    let json = match engine.snapshot_json() {
        Ok(j) => j,
        Err(e) => {
            results.push(TestResult::new("snapshot_serialize", false, e.to_string()));
            return results;
        }
    };

    match serde_json::from_str::<DashboardSnapshot>(&json) {
        Ok(snapshot) => {
            results.push(TestResult::new(
                "snapshot_round_trip",
                snapshot.flight_id == config.flight_id
                    && snapshot.seats.total == config.seat_count()
                    && snapshot.forecast.len() == 5
                    && snapshot.luggage.len() == snapshot.packing.len(),
                format!("{} bytes of JSON", json.len()),
            ));
            results.push(TestResult::new(
                "snapshot_has_conflict",
                snapshot.conflict.is_some() && snapshot.swaps.len() <= 3,
                format!("{} swaps", snapshot.swaps.len()),
            ));
        }
        Err(e) => results.push(TestResult::new("snapshot_round_trip", false, e.to_string())),
    }

    if verbose {
        println!("  snapshot is {} bytes", json.len());
    }

    results
}
