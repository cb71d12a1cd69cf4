//! Seat map generation

use std::collections::BTreeSet;

use rand::Rng;

use super::names::generate_name;
use crate::components::*;
use crate::config::FlightConfig;
use crate::error::Result;
use crate::systems::SeatMap;

/// Chance that any given seat is already booked
pub const OCCUPANCY_PROBABILITY: f64 = 0.45;
/// Chance that a booked passenger is gold tier
pub const GOLD_PROBABILITY: f64 = 0.15;
/// Chance that a non-gold passenger is silver tier
pub const SILVER_PROBABILITY: f64 = 0.15;
/// Chance that a passenger travels with a medical need
pub const MEDICAL_PROBABILITY: f64 = 0.05;

/// Generate every seat of the cabin described by `config`.
///
/// Seats are created row by row, left to right. Occupancy is an independent
/// draw per seat, so the same config and seed always yield the same map.
pub fn generate_seat_map(config: &FlightConfig, rng: &mut impl Rng) -> Result<SeatMap> {
    config.validate()?;

    let mut seats = Vec::with_capacity(config.seat_count());
    for row in 1..=config.rows {
        for &column in &config.columns {
            let occupied = rng.gen_bool(OCCUPANCY_PROBABILITY);
            let occupant = if occupied {
                Some(generate_occupant(rng))
            } else {
                None
            };

            seats.push(Seat {
                id: SeatId::new(row, column),
                status: if occupied {
                    SeatStatus::Occupied
                } else {
                    SeatStatus::Available
                },
                occupant,
                features: seat_features(config, row, column),
                bin_proximity: bin_proximity(row, config.bins),
            });
        }
    }

    let map = SeatMap::new(seats);
    let stats = map.stats();
    log::info!(
        "Generated {} seats for {} ({}), {} occupied ({}%)",
        stats.total,
        config.flight_id,
        config.layout,
        stats.occupied,
        stats.fill_pct
    );
    Ok(map)
}

/// Synthesize the passenger sitting in a booked seat
pub fn generate_occupant(rng: &mut impl Rng) -> Occupant {
    let name = generate_name(rng);
    let loyalty_tier = random_tier(rng);
    let medical_needs = if rng.gen_bool(MEDICAL_PROBABILITY) {
        Some("wheelchair".to_string())
    } else {
        None
    };
    let luggage_volume_estimate = (20.0 + rng.gen::<f64>() * 40.0).round() as u32;

    Occupant {
        name,
        loyalty_tier,
        medical_needs,
        luggage_volume_estimate,
    }
}

/// Gold first, then silver out of the remainder, else standard
fn random_tier(rng: &mut impl Rng) -> LoyaltyTier {
    if rng.gen_bool(GOLD_PROBABILITY) {
        LoyaltyTier::Gold
    } else if rng.gen_bool(SILVER_PROBABILITY) {
        LoyaltyTier::Silver
    } else {
        LoyaltyTier::Standard
    }
}

fn seat_features(config: &FlightConfig, row: u32, column: Column) -> BTreeSet<SeatFeature> {
    let mut features = BTreeSet::new();
    if column.is_window() {
        features.insert(SeatFeature::Window);
    }
    if column.is_aisle() {
        features.insert(SeatFeature::Aisle);
    }
    if config.is_premium_row(row) {
        features.insert(SeatFeature::Premium);
        features.insert(SeatFeature::ExtraLegroom);
    }
    if config.is_exit_row(row) {
        features.insert(SeatFeature::ExitRow);
        features.insert(SeatFeature::ExtraLegroom);
    }
    features
}

/// Bins over the previous, current and next row, clamped to `1..=bins`
fn bin_proximity(row: u32, bins: u32) -> (u32, u32) {
    let low = row.saturating_sub(1).clamp(1, bins);
    let high = (row + 1).clamp(1, bins);
    (low, high)
}
