//! Derived metrics. Every function here recomputes from current state.

use serde::{Deserialize, Serialize};

use crate::components::{BinCapacity, LuggageItem, Seat};

/// Bag weight bands shown next to each item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    /// Up to 15 lb
    Green,
    /// Over 15 lb, up to 25 lb
    Amber,
    /// Over 25 lb
    Red,
}

/// Seat occupancy summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatStats {
    pub total: usize,
    /// Occupied plus selected
    pub occupied: usize,
    pub available: usize,
    pub fill_pct: u32,
}

pub fn weight_status(weight_lbs: f64) -> WeightStatus {
    if weight_lbs <= 15.0 {
        WeightStatus::Green
    } else if weight_lbs <= 25.0 {
        WeightStatus::Amber
    } else {
        WeightStatus::Red
    }
}

/// Round half up, so 2.5 becomes 3 and -2.5 becomes -2.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// `part / whole` as a rounded percentage. Zero when `whole` is zero.
pub fn percent(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 {
        return 0;
    }
    round_half_up(part / whole * 100.0).max(0.0) as u32
}

pub fn seat_stats(seats: &[Seat]) -> SeatStats {
    let total = seats.len();
    let occupied = seats.iter().filter(|s| s.is_taken()).count();
    SeatStats {
        total,
        occupied,
        available: total - occupied,
        fill_pct: percent(occupied as f64, total as f64),
    }
}

pub fn total_volume(items: &[LuggageItem]) -> f64 {
    items.iter().map(LuggageItem::volume).sum()
}

pub fn bin_volume(bin: &BinCapacity) -> f64 {
    bin.volume()
}

/// Share of the bin volume used by `items`, capped at 100.
///
/// This is a volume ratio only; it says nothing about whether the items
/// actually fit together geometrically.
pub fn capacity_pct(items: &[LuggageItem], bin: &BinCapacity) -> u32 {
    percent(total_volume(items), bin_volume(bin)).min(100)
}

pub fn remaining_pct(items: &[LuggageItem], bin: &BinCapacity) -> u32 {
    100 - capacity_pct(items, bin)
}
