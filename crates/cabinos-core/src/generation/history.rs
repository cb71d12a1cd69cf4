//! Synthetic capacity history used before live samples arrive

use rand::Rng;

use crate::systems::HistorySeries;

/// Samples in a freshly seeded history
pub const SEED_SAMPLES: usize = 20;

/// A gentle wave around 30-55%: `30 + sin(i/2)*15 + U[0,10)`
pub fn seed_history(rng: &mut impl Rng) -> HistorySeries {
    (0..SEED_SAMPLES)
        .map(|i| 30.0 + (i as f64 * 0.5).sin() * 15.0 + rng.gen::<f64>() * 10.0)
        .collect()
}
