//! Seat components: identity, status, features, occupant.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seat letter within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
    ];

    /// Zero-based position across the cabin, A = 0
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn letter(self) -> char {
        match self {
            Column::A => 'A',
            Column::B => 'B',
            Column::C => 'C',
            Column::D => 'D',
            Column::E => 'E',
            Column::F => 'F',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Column::A),
            'B' => Some(Column::B),
            'C' => Some(Column::C),
            'D' => Some(Column::D),
            'E' => Some(Column::E),
            'F' => Some(Column::F),
            _ => None,
        }
    }

    pub fn is_window(self) -> bool {
        matches!(self, Column::A | Column::F)
    }

    pub fn is_aisle(self) -> bool {
        matches!(self, Column::C | Column::D)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Seat identity, rendered as row followed by letter (`12A`).
///
/// Ordering is by row, then column, which is also the order seats are
/// generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SeatId {
    pub row: u32,
    pub column: Column,
}

impl SeatId {
    pub fn new(row: u32, column: Column) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

/// Text that is not a `<row><letter>` seat label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid seat label '{0}'")]
pub struct ParseSeatIdError(pub String);

impl FromStr for SeatId {
    type Err = ParseSeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseSeatIdError(s.to_string());

        let letter = trimmed.chars().last().ok_or_else(err)?;
        let column = Column::from_letter(letter).ok_or_else(err)?;
        let digits = &trimmed[..trimmed.len() - letter.len_utf8()];
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }
        let row: u32 = digits.parse().map_err(|_| err())?;
        if row == 0 {
            return Err(err());
        }
        Ok(SeatId { row, column })
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for SeatId {
    type Error = ParseSeatIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Booking state of a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Available,
    Occupied,
    Selected,
}

/// Physical or fare attributes of a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatFeature {
    Window,
    Aisle,
    Premium,
    ExtraLegroom,
    ExitRow,
}

impl SeatFeature {
    pub fn label(self) -> &'static str {
        match self {
            SeatFeature::Window => "window",
            SeatFeature::Aisle => "aisle",
            SeatFeature::Premium => "premium",
            SeatFeature::ExtraLegroom => "extra legroom",
            SeatFeature::ExitRow => "exit row",
        }
    }
}

/// Frequent-flyer tier, ordered lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    Standard,
    Silver,
    Gold,
}

impl LoyaltyTier {
    /// Steps between two tiers (0..=2)
    pub fn gap(self, other: LoyaltyTier) -> u32 {
        (self as i32 - other as i32).unsigned_abs()
    }
}

/// Passenger holding a seat. Never modified after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupant {
    pub name: String,
    pub loyalty_tier: LoyaltyTier,
    pub medical_needs: Option<String>,
    /// Estimated carry-on volume in litres
    pub luggage_volume_estimate: u32,
}

impl Occupant {
    pub fn needs_assistance(&self) -> bool {
        self.medical_needs.is_some()
    }
}

/// A single seat in the cabin.
///
/// `status` and `occupant` are only changed by
/// [`SeatMap::select_seat`](crate::systems::SeatMap::select_seat), so they are
/// exposed through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub(crate) status: SeatStatus,
    pub(crate) occupant: Option<Occupant>,
    pub features: BTreeSet<SeatFeature>,
    /// Overhead bins within reach, inclusive `(min, max)`
    pub bin_proximity: (u32, u32),
}

impl Seat {
    pub fn row(&self) -> u32 {
        self.id.row
    }

    pub fn column(&self) -> Column {
        self.id.column
    }

    pub fn status(&self) -> SeatStatus {
        self.status
    }

    pub fn occupant(&self) -> Option<&Occupant> {
        self.occupant.as_ref()
    }

    pub fn has_feature(&self, feature: SeatFeature) -> bool {
        self.features.contains(&feature)
    }

    pub fn is_premium(&self) -> bool {
        self.has_feature(SeatFeature::Premium)
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    /// Counts toward cabin fill (occupied or held by a selection)
    pub fn is_taken(&self) -> bool {
        matches!(self.status, SeatStatus::Occupied | SeatStatus::Selected)
    }
}
