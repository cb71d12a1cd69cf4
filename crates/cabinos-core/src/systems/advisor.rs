//! Seat conflict resolution - compatibility of two claims and ranked swap
//! alternatives drawn from the live seat map.
//!
//! A candidate seat is scored on three signals, each in `0.0..=1.0`:
//!
//! - **class parity**: same cabin class (premium or main) as the contested seat
//! - **feature match**: share of the contested seat's features it keeps
//!   (window, aisle, extra legroom, exit row)
//! - **adjacency**: `1 / (1 + rows apart + columns apart / 2)`
//!
//! The weighted mean is scaled to 0..=100. Ranking is by score, then seat id.

use serde::{Deserialize, Serialize};

use crate::components::{
    Claimant, Column, ConflictCase, LoyaltyTier, Occupant, Seat, SeatFeature, SeatId,
    SwapSuggestion,
};
use crate::error::{CabinError, Result};
use crate::systems::inventory::SeatMap;
use crate::systems::stats::round_half_up;

/// Points lost per loyalty tier between the claimants
const TIER_GAP_PENALTY: i32 = 14;
/// Points lost when both claimants need assistance
const SHARED_MEDICAL_PENALTY: i32 = 20;

/// Relative weight of each scoring signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapWeights {
    pub class_parity: f64,
    pub feature_match: f64,
    pub adjacency: f64,
}

impl Default for SwapWeights {
    fn default() -> Self {
        Self {
            class_parity: 40.0,
            feature_match: 40.0,
            adjacency: 20.0,
        }
    }
}

impl SwapWeights {
    fn total(&self) -> f64 {
        self.class_parity + self.feature_match + self.adjacency
    }
}

/// Two claims on one seat, as presented to the advisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictScenario {
    pub seat: SeatId,
    pub first: Claimant,
    pub second: Claimant,
}

impl ConflictScenario {
    /// Gold member asking for an upgrade into a window seat already
    /// pre-booked by a standard passenger.
    pub fn demo() -> Self {
        Self {
            seat: SeatId::new(3, Column::A),
            first: Claimant {
                occupant: Occupant {
                    name: "Sarah Chen".to_string(),
                    loyalty_tier: LoyaltyTier::Gold,
                    medical_needs: None,
                    luggage_volume_estimate: 40,
                },
                reason: "Loyalty upgrade request".to_string(),
            },
            second: Claimant {
                occupant: Occupant {
                    name: "Mark Johnson".to_string(),
                    loyalty_tier: LoyaltyTier::Standard,
                    medical_needs: None,
                    luggage_volume_estimate: 35,
                },
                reason: "Pre-booked window seat".to_string(),
            },
        }
    }
}

/// How amicably two claims can be settled, 0..=100.
///
/// Starts at 100, loses 14 points per loyalty tier between the claimants and
/// 20 more when both need assistance.
pub fn compatibility_score(a: &Occupant, b: &Occupant) -> u8 {
    let mut score = 100 - TIER_GAP_PENALTY * a.loyalty_tier.gap(b.loyalty_tier) as i32;
    if a.needs_assistance() && b.needs_assistance() {
        score -= SHARED_MEDICAL_PENALTY;
    }
    score.clamp(0, 100) as u8
}

/// Read-only advisor over a [`SeatMap`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapAdvisor {
    pub weights: SwapWeights,
    /// Longest list returned by [`suggest_swaps`](Self::suggest_swaps)
    pub max_suggestions: usize,
}

impl Default for SwapAdvisor {
    fn default() -> Self {
        Self {
            weights: SwapWeights::default(),
            max_suggestions: 3,
        }
    }
}

impl SwapAdvisor {
    pub fn new(weights: SwapWeights, max_suggestions: usize) -> Self {
        Self {
            weights,
            max_suggestions,
        }
    }

    /// Describe the conflict in `scenario`. Fails if its seat is not in `seats`.
    pub fn find_conflict(
        &self,
        seats: &SeatMap,
        scenario: &ConflictScenario,
    ) -> Result<ConflictCase> {
        if seats.seat(&scenario.seat).is_none() {
            return Err(CabinError::SeatNotFound(scenario.seat.to_string()));
        }
        Ok(ConflictCase {
            seat: scenario.seat,
            first: scenario.first.clone(),
            second: scenario.second.clone(),
            compatibility_score: compatibility_score(
                &scenario.first.occupant,
                &scenario.second.occupant,
            ),
        })
    }

    /// Rank available seats as alternatives to `contested`.
    pub fn suggest_swaps(
        &self,
        seats: &SeatMap,
        contested: &SeatId,
    ) -> Result<Vec<SwapSuggestion>> {
        let origin = seats
            .seat(contested)
            .ok_or_else(|| CabinError::SeatNotFound(contested.to_string()))?;

        let mut suggestions: Vec<SwapSuggestion> = seats
            .seats()
            .iter()
            .filter(|s| s.id != origin.id && s.is_available())
            .map(|candidate| SwapSuggestion {
                pair: (origin.id, candidate.id),
                benefit: describe_benefit(origin, candidate),
                score: self.score(origin, candidate),
            })
            .collect();

        suggestions.sort_by(|a, b| b.score.cmp(&a.score).then(a.pair.1.cmp(&b.pair.1)));
        suggestions.truncate(self.max_suggestions);

        log::debug!(
            "Ranked {} swap alternatives for seat {}",
            suggestions.len(),
            contested
        );
        Ok(suggestions)
    }

    /// Combined score of `candidate` as a replacement for `origin`, 0..=100.
    pub fn score(&self, origin: &Seat, candidate: &Seat) -> u8 {
        let total = self.weights.total();
        if total <= 0.0 {
            return 0;
        }
        let weighted = self.weights.class_parity * class_parity(origin, candidate)
            + self.weights.feature_match * feature_match(origin, candidate)
            + self.weights.adjacency * adjacency(origin, candidate);
        round_half_up(weighted / total * 100.0).clamp(0.0, 100.0) as u8
    }
}

fn class_parity(origin: &Seat, candidate: &Seat) -> f64 {
    if origin.is_premium() == candidate.is_premium() {
        1.0
    } else {
        0.0
    }
}

/// Features compared seat-to-seat. Premium is covered by class parity.
fn comfort_features(seat: &Seat) -> impl Iterator<Item = SeatFeature> + '_ {
    seat.features
        .iter()
        .copied()
        .filter(|f| *f != SeatFeature::Premium)
}

fn feature_match(origin: &Seat, candidate: &Seat) -> f64 {
    let wanted = comfort_features(origin).count();
    if wanted == 0 {
        return 1.0;
    }
    let kept = comfort_features(origin)
        .filter(|f| candidate.has_feature(*f))
        .count();
    kept as f64 / wanted as f64
}

fn adjacency(origin: &Seat, candidate: &Seat) -> f64 {
    let rows = origin.row().abs_diff(candidate.row()) as f64;
    let cols = origin.column().index().abs_diff(candidate.column().index()) as f64;
    1.0 / (1.0 + rows + cols / 2.0)
}

fn describe_benefit(origin: &Seat, candidate: &Seat) -> String {
    let mut parts = Vec::new();

    parts.push(
        match (origin.is_premium(), candidate.is_premium()) {
            (a, b) if a == b => "Same cabin class",
            (false, true) => "Cabin upgrade",
            _ => "Main cabin",
        }
        .to_string(),
    );

    for feature in comfort_features(origin).filter(|f| candidate.has_feature(*f)) {
        parts.push(format!("{} maintained", feature.label()));
    }
    for feature in comfort_features(candidate).filter(|f| !origin.has_feature(*f)) {
        parts.push(format!("adds {}", feature.label()));
    }

    let rows = origin.row().abs_diff(candidate.row());
    parts.push(match rows {
        0 => "same row".to_string(),
        1 => "1 row away".to_string(),
        n => format!("{} rows away", n),
    });

    parts.join(", ")
}
