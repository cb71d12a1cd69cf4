//! Systems - the logic that reads and updates the cabin data model.
//!
//! Each system is an independent component with its own state (or none);
//! [`CabinEngine`](crate::engine::CabinEngine) wires them together.

pub mod advisor;
pub mod forecast;
pub mod inventory;
pub mod luggage;
pub mod packing;
pub mod stats;

pub use advisor::{compatibility_score, ConflictScenario, SwapAdvisor, SwapWeights};
pub use forecast::{ForecastEngine, HistorySeries};
pub use inventory::SeatMap;
pub use luggage::{carry_on_compliance, Compliance, LuggageManifest, NewLuggage};
pub use packing::optimize_packing;
pub use stats::{weight_status, SeatStats, WeightStatus};
