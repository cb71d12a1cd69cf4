//! Serializable dashboard view handed to the presentation layer.
//!
//! A snapshot is assembled from scratch on every request; nothing in it is
//! cached between calls.

use serde::{Deserialize, Serialize};

use crate::components::{ConflictCase, LuggageItem, PackedItem, SeatId, SwapSuggestion};
use crate::systems::{carry_on_compliance, weight_status, Compliance, SeatStats, WeightStatus};

/// Per-bag line of the luggage panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuggageLine {
    pub item_id: u32,
    pub label: String,
    pub weight_status: WeightStatus,
    pub compliance: Compliance,
}

impl From<&LuggageItem> for LuggageLine {
    fn from(item: &LuggageItem) -> Self {
        Self {
            item_id: item.id,
            label: item.label.clone(),
            weight_status: weight_status(item.weight_lbs),
            compliance: carry_on_compliance(&item.dims),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub flight_id: String,
    pub layout: String,
    pub boarding_groups: u32,
    pub seats: SeatStats,
    pub selected_seat: Option<SeatId>,
    pub luggage: Vec<LuggageLine>,
    pub packing: Vec<PackedItem>,
    pub capacity_pct: u32,
    pub remaining_pct: u32,
    pub history: Vec<f64>,
    pub forecast: Vec<u32>,
    /// `None` when the active conflict names a seat this cabin lacks
    pub conflict: Option<ConflictCase>,
    pub swaps: Vec<SwapSuggestion>,
}

impl DashboardSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
