//! Seat conflict records. Built fresh for every request, never stored.

use serde::{Deserialize, Serialize};

use super::seat::{Occupant, SeatId};

/// One passenger's claim on a seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claimant {
    pub occupant: Occupant,
    pub reason: String,
}

/// Two claimants contending for the same seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictCase {
    pub seat: SeatId,
    pub first: Claimant,
    pub second: Claimant,
    /// How amicably the claims can be resolved, 0..=100
    pub compatibility_score: u8,
}

/// A proposed move away from a contested seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapSuggestion {
    /// (contested seat, alternative seat)
    pub pair: (SeatId, SeatId),
    pub benefit: String,
    pub score: u8,
}
