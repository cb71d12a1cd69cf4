//! Data model for the cabin.
//!
//! Components are plain data. Mutation rules live in [`crate::systems`].

mod conflict;
mod luggage;
mod seat;

pub use conflict::*;
pub use luggage::*;
pub use seat::*;
