//! Cabin engine - composition root wiring the independent systems together

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::*;
use crate::config::FlightConfig;
use crate::error::Result;
use crate::generation::{
    generate_seat_map, manual_confidence, random_bag, scan_reading, seed_history, starter_items,
    ScanReading,
};
use crate::snapshot::{DashboardSnapshot, LuggageLine};
use crate::systems::forecast::DEFAULT_PERIODS;
use crate::systems::*;

/// Owns one cabin session.
///
/// Every system is a separate value with its own state; the engine only
/// routes calls and supplies the shared random source. Operations run to
/// completion and take `&mut self` where they change state or draw numbers,
/// so a session has a single writer by construction.
pub struct CabinEngine<R: Rng = StdRng> {
    /// Layout the seat map was generated from
    config: FlightConfig,
    /// Seat inventory and selection
    seats: SeatMap,
    /// Bags in the active bin
    luggage: LuggageManifest,
    /// Capacity history and projection
    forecaster: ForecastEngine,
    /// Swap scoring
    advisor: SwapAdvisor,
    /// Claims currently under review
    conflict: ConflictScenario,
    /// Occupancy draws, scan simulation and forecast jitter
    rng: R,
}

impl CabinEngine<StdRng> {
    /// Start a session with an entropy-seeded random source
    pub fn new(config: FlightConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a reproducible session
    pub fn with_seed(config: FlightConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CabinEngine<R> {
    /// Generate the cabin, stow the starter bags and seed the history.
    pub fn with_rng(config: FlightConfig, mut rng: R) -> Result<Self> {
        let seats = generate_seat_map(&config, &mut rng)?;

        let mut luggage = LuggageManifest::new(config.bin_capacity, config.bin_label.clone());
        for item in starter_items() {
            luggage.add_item(item)?;
        }

        let forecaster = ForecastEngine::new(seed_history(&mut rng));

        Ok(Self::from_parts(
            config,
            seats,
            luggage,
            forecaster,
            SwapAdvisor::default(),
            rng,
        ))
    }

    /// Assemble a session from systems built elsewhere.
    pub fn from_parts(
        config: FlightConfig,
        seats: SeatMap,
        luggage: LuggageManifest,
        forecaster: ForecastEngine,
        advisor: SwapAdvisor,
        rng: R,
    ) -> Self {
        Self {
            config,
            seats,
            luggage,
            forecaster,
            advisor,
            conflict: ConflictScenario::demo(),
            rng,
        }
    }

    /// Regenerate every seat from `config`. Bags and history are kept; the
    /// bags move to the bin `config` names.
    ///
    /// On error the current cabin is left untouched.
    pub fn generate_inventory(&mut self, config: FlightConfig) -> Result<&SeatMap> {
        let seats = generate_seat_map(&config, &mut self.rng)?;
        self.luggage.set_bin(config.bin_capacity, config.bin_label.clone());
        self.config = config;
        self.seats = seats;
        Ok(&self.seats)
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn seats(&self) -> &SeatMap {
        &self.seats
    }

    pub fn luggage(&self) -> &LuggageManifest {
        &self.luggage
    }

    pub fn forecaster(&self) -> &ForecastEngine {
        &self.forecaster
    }

    pub fn advisor(&self) -> &SwapAdvisor {
        &self.advisor
    }

    pub fn set_advisor(&mut self, advisor: SwapAdvisor) {
        self.advisor = advisor;
    }

    pub fn conflict_scenario(&self) -> &ConflictScenario {
        &self.conflict
    }

    /// Replace the claims under review
    pub fn set_conflict(&mut self, scenario: ConflictScenario) {
        self.conflict = scenario;
    }

    // ── Seats ──────────────────────────────────────────────────────────

    /// Select a seat by label. `Ok(None)` if the seat is occupied.
    pub fn select_seat(&mut self, label: &str) -> Result<Option<&Seat>> {
        self.seats.select_by_label(label)
    }

    pub fn stats(&self) -> SeatStats {
        self.seats.stats()
    }

    // ── Luggage ────────────────────────────────────────────────────────

    /// Add a bag entered by hand. Material defaults to nylon.
    pub fn add_luggage_item(
        &mut self,
        label: impl Into<String>,
        dims: Dimensions,
        weight_lbs: f64,
        material: Option<Material>,
    ) -> Result<&LuggageItem> {
        let new = NewLuggage {
            label: label.into(),
            dims,
            weight_lbs,
            material,
            confidence_pct: manual_confidence(&mut self.rng),
        };
        self.luggage.add_item(new)
    }

    pub fn remove_luggage_item(&mut self, id: u32) -> Result<LuggageItem> {
        self.luggage.remove_item(id)
    }

    /// Stow a bag reported by the scanner, keeping its confidence.
    pub fn ingest_scan(&mut self, reading: ScanReading) -> Result<&LuggageItem> {
        let label = format!("Scan #{}", self.luggage.next_id());
        self.luggage.add_item(reading.into_new_luggage(label))
    }

    /// Demo-mode scanner reading, for sessions without a camera
    pub fn simulate_scan(&mut self) -> ScanReading {
        scan_reading(&mut self.rng)
    }

    /// Quick-add a random cabin bag
    pub fn add_random_bag(&mut self) -> Result<&LuggageItem> {
        let bag = random_bag(&mut self.rng, self.luggage.next_id());
        self.luggage.add_item(bag)
    }

    pub fn optimize_packing(&self) -> Vec<PackedItem> {
        optimize_packing(self.luggage.items())
    }

    pub fn capacity_pct(&self) -> u32 {
        self.luggage.capacity_pct()
    }

    pub fn remaining_pct(&self) -> u32 {
        self.luggage.remaining_pct()
    }

    // ── Forecast ───────────────────────────────────────────────────────

    pub fn forecast(&mut self, periods: usize) -> Vec<u32> {
        self.forecaster.forecast(periods, &mut self.rng)
    }

    /// Forecast over the default horizon of five periods
    pub fn forecast_default(&mut self) -> Vec<u32> {
        self.forecast(DEFAULT_PERIODS)
    }

    pub fn add_data_point(&mut self, value: f64) {
        self.forecaster.add_data_point(value);
    }

    // ── Conflicts ──────────────────────────────────────────────────────

    pub fn find_conflict(&self) -> Result<ConflictCase> {
        self.advisor.find_conflict(&self.seats, &self.conflict)
    }

    pub fn suggest_swaps(&self) -> Result<Vec<SwapSuggestion>> {
        self.advisor.suggest_swaps(&self.seats, &self.conflict.seat)
    }

    // ── Presentation ───────────────────────────────────────────────────

    /// Everything the dashboard shows, computed now.
    pub fn snapshot(&mut self) -> DashboardSnapshot {
        let forecast = self.forecast_default();
        let conflict = self.find_conflict().ok();
        let swaps = if conflict.is_some() {
            self.suggest_swaps().unwrap_or_default()
        } else {
            Vec::new()
        };

        DashboardSnapshot {
            flight_id: self.config.flight_id.clone(),
            layout: self.config.layout.clone(),
            boarding_groups: self.config.boarding_groups,
            seats: self.stats(),
            selected_seat: self.seats.selected().map(|s| s.id),
            luggage: self.luggage.items().iter().map(LuggageLine::from).collect(),
            packing: self.optimize_packing(),
            capacity_pct: self.capacity_pct(),
            remaining_pct: self.remaining_pct(),
            history: self.forecaster.history().iter().collect(),
            forecast,
            conflict,
            swaps,
        }
    }

    pub fn snapshot_json(&mut self) -> serde_json::Result<String> {
        self.snapshot().to_json()
    }
}
