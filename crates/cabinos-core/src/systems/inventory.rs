//! Seat inventory - the one place seat status changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::components::{Seat, SeatId, SeatStatus};
use crate::error::{CabinError, Result};
use crate::systems::stats::{seat_stats, SeatStats};

/// All seats of a flight, row-major, with at most one selection.
///
/// Serialized as the seat list alone; the id index and the selection are
/// rebuilt from seat statuses on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SeatList", into = "SeatList")]
pub struct SeatMap {
    seats: Vec<Seat>,
    index: HashMap<SeatId, usize>,
    selected: Option<usize>,
}

#[derive(Serialize, Deserialize)]
struct SeatList {
    seats: Vec<Seat>,
}

impl From<SeatList> for SeatMap {
    fn from(list: SeatList) -> Self {
        Self::build(list.seats, true)
    }
}

impl From<SeatMap> for SeatList {
    fn from(map: SeatMap) -> Self {
        Self { seats: map.seats }
    }
}

impl SeatMap {
    /// Build a map from freshly generated seats.
    ///
    /// Seats arriving as `Selected` are demoted to `Available`; a new map
    /// never starts with a selection. A seat with an occupant is `Occupied`.
    pub fn new(seats: Vec<Seat>) -> Self {
        Self::build(seats, false)
    }

    /// Normalize statuses and index the seats. With `keep_selection` the
    /// first `Selected` seat stays selected and any others are released.
    fn build(mut seats: Vec<Seat>, keep_selection: bool) -> Self {
        let mut selected = None;
        for (i, seat) in seats.iter_mut().enumerate() {
            if seat.occupant.is_some() {
                seat.status = SeatStatus::Occupied;
            }
            if seat.status == SeatStatus::Selected {
                if keep_selection && selected.is_none() {
                    selected = Some(i);
                } else {
                    seat.status = SeatStatus::Available;
                }
            }
        }
        let index = seats.iter().enumerate().map(|(i, s)| (s.id, i)).collect();
        Self {
            seats,
            index,
            selected,
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seat(&self, id: &SeatId) -> Option<&Seat> {
        self.position(id).map(|i| &self.seats[i])
    }

    /// Look up a seat by its printed label (`"14C"`)
    pub fn seat_by_label(&self, label: &str) -> Result<&Seat> {
        let id = parse_label(label)?;
        self.seat(&id)
            .ok_or_else(|| CabinError::SeatNotFound(label.to_string()))
    }

    pub fn selected(&self) -> Option<&Seat> {
        self.selected.map(|i| &self.seats[i])
    }

    /// Select a seat for the current session.
    ///
    /// Returns `Ok(None)` without touching any seat when the target is
    /// occupied. Otherwise the previous selection (if any) goes back to
    /// `Available` and the target becomes `Selected`.
    pub fn select_seat(&mut self, id: &SeatId) -> Result<Option<&Seat>> {
        let target = self
            .position(id)
            .ok_or_else(|| CabinError::SeatNotFound(id.to_string()))?;

        if self.seats[target].status == SeatStatus::Occupied {
            log::debug!("Seat {} is occupied, selection ignored", id);
            return Ok(None);
        }

        if let Some(previous) = self.selected.filter(|&p| p != target) {
            self.seats[previous].status = SeatStatus::Available;
            log::debug!("Released seat {}", self.seats[previous].id);
        }

        self.seats[target].status = SeatStatus::Selected;
        self.selected = Some(target);
        log::debug!("Selected seat {}", id);
        Ok(Some(&self.seats[target]))
    }

    /// [`select_seat`](Self::select_seat) taking a printed label.
    ///
    /// Labels that do not parse name no seat and fail with `SeatNotFound`.
    pub fn select_by_label(&mut self, label: &str) -> Result<Option<&Seat>> {
        let id = parse_label(label)?;
        self.select_seat(&id)
    }

    pub fn stats(&self) -> SeatStats {
        seat_stats(&self.seats)
    }

    fn position(&self, id: &SeatId) -> Option<usize> {
        self.index.get(id).copied()
    }
}

fn parse_label(label: &str) -> Result<SeatId> {
    label
        .parse()
        .map_err(|_| CabinError::SeatNotFound(label.to_string()))
}
