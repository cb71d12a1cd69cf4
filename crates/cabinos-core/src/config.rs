//! Flight configuration and its validation.
//!
//! A [`FlightConfig`] fixes the cabin layout that seats are generated from:
//! row count, seat letters, overhead bins, and which rows are premium or exit
//! rows. Configurations can be built in code (the default is a 737-800 in a
//! 3-3 layout) or parsed from JSON, where every missing field falls back to
//! the default.
//!
//! ```
//! use cabinos_core::config::{validate_config, FlightConfig};
//!
//! let json = r#"{ "rows": 4, "columns": ["A", "B"], "premium_rows": [1], "exit_rows": [3] }"#;
//! let config = FlightConfig::from_json(json).unwrap();
//! assert_eq!(config.rows, 4);
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{BinCapacity, Column};
use crate::error::{CabinError, Result};

/// Cabin layout for one flight segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub flight_id: String,
    /// Aircraft type, informational only
    pub layout: String,
    pub rows: u32,
    pub columns: Vec<Column>,
    /// Number of overhead bins along the cabin
    pub bins: u32,
    pub premium_rows: Vec<u32>,
    pub exit_rows: Vec<u32>,
    pub bin_capacity: BinCapacity,
    /// Bin that new luggage is assigned to
    pub bin_label: String,
    /// Boarding groups called at the gate, shown on the dashboard
    pub boarding_groups: u32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            flight_id: "OS-2026".to_string(),
            layout: "737-800".to_string(),
            rows: 30,
            columns: Column::ALL.to_vec(),
            bins: 12,
            premium_rows: vec![1, 2, 3, 4, 5],
            exit_rows: vec![10, 20],
            bin_capacity: BinCapacity::default(),
            bin_label: "12A".to_string(),
            boarding_groups: 5,
        }
    }
}

impl FlightConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FlightConfig = serde_json::from_str(json)
            .map_err(|e| CabinError::Configuration(vec![ConfigError::Malformed(e.to_string())]))?;
        config.validate()?;
        Ok(config)
    }

    /// `Ok` when [`validate_config`] finds nothing wrong.
    pub fn validate(&self) -> Result<()> {
        let errors = validate_config(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CabinError::Configuration(errors))
        }
    }

    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.columns.len()
    }

    pub fn is_premium_row(&self, row: u32) -> bool {
        self.premium_rows.contains(&row)
    }

    pub fn is_exit_row(&self, row: u32) -> bool {
        self.exit_rows.contains(&row)
    }
}

/// Flight configuration validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("configuration could not be parsed: {0}")]
    Malformed(String),
    #[error("flight id is empty")]
    EmptyFlightId,
    #[error("cabin needs at least one row")]
    NoRows,
    #[error("cabin needs at least one column")]
    NoColumns,
    #[error("column {0} is listed more than once")]
    DuplicateColumn(Column),
    #[error("cabin needs at least one overhead bin")]
    NoBins,
    #[error("premium row {0} is outside the cabin")]
    PremiumRowOutOfRange(u32),
    #[error("exit row {0} is outside the cabin")]
    ExitRowOutOfRange(u32),
    #[error("bin capacity must be positive in every dimension")]
    InvalidBinCapacity,
    #[error("flight needs at least one boarding group")]
    NoBoardingGroups,
}

/// Validate a flight configuration, returning all errors found.
pub fn validate_config(config: &FlightConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.flight_id.trim().is_empty() {
        errors.push(ConfigError::EmptyFlightId);
    }
    if config.rows == 0 {
        errors.push(ConfigError::NoRows);
    }
    if config.columns.is_empty() {
        errors.push(ConfigError::NoColumns);
    }
    for (i, column) in config.columns.iter().enumerate() {
        if config.columns[..i].contains(column) {
            errors.push(ConfigError::DuplicateColumn(*column));
        }
    }
    if config.bins == 0 {
        errors.push(ConfigError::NoBins);
    }

    let in_cabin = |row: u32| (1..=config.rows).contains(&row);
    for &row in &config.premium_rows {
        if !in_cabin(row) {
            errors.push(ConfigError::PremiumRowOutOfRange(row));
        }
    }
    for &row in &config.exit_rows {
        if !in_cabin(row) {
            errors.push(ConfigError::ExitRowOutOfRange(row));
        }
    }

    let cap = &config.bin_capacity;
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !(positive(cap.w) && positive(cap.h) && positive(cap.d)) {
        errors.push(ConfigError::InvalidBinCapacity);
    }
    if config.boarding_groups == 0 {
        errors.push(ConfigError::NoBoardingGroups);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FlightConfig::default();
        assert!(validate_config(&config).is_empty());
        assert_eq!(config.seat_count(), 180);
    }

    #[test]
    fn test_zero_rows_and_columns() {
        let config = FlightConfig {
            rows: 0,
            columns: vec![],
            premium_rows: vec![],
            exit_rows: vec![],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors, vec![ConfigError::NoRows, ConfigError::NoColumns]);
    }

    #[test]
    fn test_rows_outside_cabin() {
        let config = FlightConfig {
            rows: 8,
            premium_rows: vec![1, 9],
            exit_rows: vec![0, 4],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::PremiumRowOutOfRange(9)));
        assert!(errors.contains(&ConfigError::ExitRowOutOfRange(0)));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_duplicate_column_reported_once() {
        let config = FlightConfig {
            columns: vec![Column::A, Column::B, Column::A],
            ..Default::default()
        };
        assert_eq!(
            validate_config(&config),
            vec![ConfigError::DuplicateColumn(Column::A)]
        );
    }

    #[test]
    fn test_bad_bin_capacity() {
        let config = FlightConfig {
            bins: 0,
            bin_capacity: BinCapacity {
                w: 24.0,
                h: -1.0,
                d: 36.0,
            },
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::NoBins));
        assert!(errors.contains(&ConfigError::InvalidBinCapacity));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let json = r#"{
            "flight_id": "OS-7",
            "rows": 2,
            "columns": ["A", "B"],
            "premium_rows": [],
            "exit_rows": []
        }"#;
        let config = FlightConfig::from_json(json).unwrap();
        assert_eq!(config.flight_id, "OS-7");
        assert_eq!(config.seat_count(), 4);
        assert_eq!(config.bins, 12);
        assert_eq!(config.bin_label, "12A");
        assert_eq!(config.boarding_groups, 5);
    }

    #[test]
    fn test_zero_boarding_groups() {
        let config = FlightConfig {
            boarding_groups: 0,
            ..Default::default()
        };
        assert_eq!(validate_config(&config), vec![ConfigError::NoBoardingGroups]);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = FlightConfig::from_json("{ rows: ").unwrap_err();
        assert!(matches!(
            err,
            CabinError::Configuration(ref errors) if matches!(errors[0], ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_json_runs_validation() {
        let err = FlightConfig::from_json(r#"{ "rows": 0 }"#).unwrap_err();
        match err {
            CabinError::Configuration(errors) => {
                assert!(errors.contains(&ConfigError::NoRows));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
