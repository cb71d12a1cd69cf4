//! Generation - seeded synthesis of seats, passengers, luggage and history.
//!
//! Every generator takes the random source as a parameter, so a seeded
//! `StdRng` reproduces the same cabin.

mod history;
mod luggage;
mod names;
mod seats;

pub use history::*;
pub use luggage::*;
pub use names::*;
pub use seats::*;
