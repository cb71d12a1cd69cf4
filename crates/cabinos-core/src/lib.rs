//! Cabin OS Core - cabin management decision layer
//!
//! Seat inventory and selection, overhead-bin packing advice, a short-horizon
//! bin capacity forecast, and seat swap suggestions for conflicting claims.
//! Rendering, camera and voice input belong to the shell that embeds this
//! crate; it calls in synchronously and displays what comes back.
//!
//! # Architecture
//!
//! - **Components**: plain data (seats, occupants, luggage, conflicts)
//! - **Generation**: seeded synthesis of cabins, bags and history
//! - **Systems**: independent logic units (inventory, luggage manifest,
//!   packing, forecast, swap advisor, stats)
//! - **Engine**: a thin composition root that owns one instance of each
//!   system and the random source
//!
//! # Example
//!
//! ```rust
//! use cabinos_core::prelude::*;
//!
//! let mut engine = CabinEngine::with_seed(FlightConfig::default(), 7).unwrap();
//!
//! // Occupied seats are a no-op rather than an error
//! if let Some(seat) = engine.select_seat("14C").unwrap() {
//!     assert_eq!(seat.status(), SeatStatus::Selected);
//! }
//!
//! let forecast = engine.forecast(5);
//! assert_eq!(forecast.len(), 5);
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod snapshot;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::FlightConfig;
    pub use crate::engine::CabinEngine;
    pub use crate::error::CabinError;
    pub use crate::snapshot::DashboardSnapshot;
    pub use crate::systems::{SeatStats, WeightStatus};
}
