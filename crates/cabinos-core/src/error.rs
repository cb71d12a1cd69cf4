//! Error types shared by every cabin operation.

use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, CabinError>;

/// Recoverable failures returned to the caller.
///
/// Selecting an occupied seat is not an error; see
/// [`SeatMap::select_seat`](crate::systems::SeatMap::select_seat).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CabinError {
    #[error("seat '{0}' not found")]
    SeatNotFound(String),

    #[error("luggage item {0} not found")]
    ItemNotFound(u32),

    #[error("invalid {field}: expected a positive value, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("invalid flight configuration: {}", join_errors(.0))]
    Configuration(Vec<ConfigError>),
}

impl CabinError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CabinError::SeatNotFound(_) | CabinError::ItemNotFound(_))
    }
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
