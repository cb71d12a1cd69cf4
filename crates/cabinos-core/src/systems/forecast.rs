//! Short-horizon capacity forecast by exponential smoothing.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::systems::stats::round_half_up;

/// Samples kept before the oldest is evicted
pub const HISTORY_CAPACITY: usize = 50;
/// Smoothing factor applied to each new sample
pub const SMOOTHING_ALPHA: f64 = 0.3;
/// Points projected when the caller does not say
pub const DEFAULT_PERIODS: usize = 5;
/// Rise added per projected period, in percentage points
pub const TREND_STEP: f64 = 3.0;
/// Upper bound of the uniform jitter added to each point
pub const NOISE_SPAN: f64 = 5.0;

/// Bounded FIFO of capacity samples, oldest first.
///
/// Serialized as a plain array; loading keeps only the newest
/// [`HISTORY_CAPACITY`] samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct HistorySeries {
    samples: VecDeque<f64>,
}

impl HistorySeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample, evicting the oldest once over capacity.
    pub fn push(&mut self, value: f64) {
        self.samples.push_back(value);
        while self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn oldest(&self) -> Option<f64> {
        self.samples.front().copied()
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }
}

impl FromIterator<f64> for HistorySeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut series = HistorySeries::new();
        for v in iter {
            series.push(v);
        }
        series
    }
}

impl From<Vec<f64>> for HistorySeries {
    fn from(samples: Vec<f64>) -> Self {
        samples.into_iter().collect()
    }
}

impl From<HistorySeries> for Vec<f64> {
    fn from(series: HistorySeries) -> Self {
        series.samples.into()
    }
}

/// Exponentially smoothed level of `samples`, seeded at the first one.
///
/// The seed sample is also folded in once as the first step, which leaves
/// the level unchanged. `None` for an empty series.
pub fn smoothed_level(samples: impl IntoIterator<Item = f64>, alpha: f64) -> Option<f64> {
    let mut iter = samples.into_iter().peekable();
    let mut level = *iter.peek()?;
    for v in iter {
        level = alpha * v + (1.0 - alpha) * level;
    }
    Some(level)
}

/// Project `periods` points from `level`: `round(level + i*3 + noise)`
/// clamped to 0..=100, with `noise` drawn uniformly from `[0, 5)`.
pub fn project(level: f64, periods: usize, noise: &mut impl Rng) -> Vec<u32> {
    (0..periods)
        .map(|i| {
            let jitter = noise.gen::<f64>() * NOISE_SPAN;
            round_half_up(level + i as f64 * TREND_STEP + jitter).clamp(0.0, 100.0) as u32
        })
        .collect()
}

/// Holds the history and turns it into forecasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEngine {
    history: HistorySeries,
    alpha: f64,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new(HistorySeries::new())
    }
}

impl ForecastEngine {
    pub fn new(history: HistorySeries) -> Self {
        Self {
            history,
            alpha: SMOOTHING_ALPHA,
        }
    }

    pub fn history(&self) -> &HistorySeries {
        &self.history
    }

    /// Record a sample. Non-finite values are dropped.
    pub fn add_data_point(&mut self, value: f64) {
        if !value.is_finite() {
            log::warn!("Ignoring non-finite capacity sample {}", value);
            return;
        }
        self.history.push(value);
    }

    /// Current smoothed level, 0 for an empty history
    pub fn level(&self) -> f64 {
        smoothed_level(self.history.iter(), self.alpha).unwrap_or(0.0)
    }

    pub fn forecast(&self, periods: usize, noise: &mut impl Rng) -> Vec<u32> {
        project(self.level(), periods, noise)
    }
}
