//! Luggage generation: the starter manifest, scanner readings and quick-add bags

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Dimensions, Material};
use crate::systems::NewLuggage;

/// Estimated pounds per cubic inch of a packed bag
const SCAN_DENSITY: f64 = 0.012;

/// What the dimension scanner reports for one bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReading {
    pub dims: Dimensions,
    pub weight_lbs: f64,
    pub material: Material,
    pub confidence_pct: u8,
}

impl ScanReading {
    pub fn into_new_luggage(self, label: impl Into<String>) -> NewLuggage {
        NewLuggage {
            label: label.into(),
            dims: self.dims,
            weight_lbs: self.weight_lbs,
            material: Some(self.material),
            confidence_pct: self.confidence_pct,
        }
    }
}

/// Bags already stowed when the dashboard opens
pub fn starter_items() -> Vec<NewLuggage> {
    vec![
        NewLuggage {
            label: "Carry-on Roller".to_string(),
            dims: Dimensions::new(22.0, 14.0, 9.0),
            weight_lbs: 18.0,
            material: Some(Material::Hardshell),
            confidence_pct: 94,
        },
        NewLuggage {
            label: "Laptop Bag".to_string(),
            dims: Dimensions::new(16.0, 12.0, 5.0),
            weight_lbs: 8.0,
            material: Some(Material::Nylon),
            confidence_pct: 91,
        },
        NewLuggage {
            label: "Duffel Bag".to_string(),
            dims: Dimensions::new(18.0, 11.0, 10.0),
            weight_lbs: 22.0,
            material: Some(Material::Leather),
            confidence_pct: 88,
        },
    ]
}

/// Simulated camera scan of a typical cabin bag
pub fn scan_reading(rng: &mut impl Rng) -> ScanReading {
    let dims = Dimensions::new(
        rng.gen_range(20..=25) as f64,
        rng.gen_range(12..=16) as f64,
        rng.gen_range(7..=11) as f64,
    );
    let weight_lbs = (dims.volume() * SCAN_DENSITY + rng.gen::<f64>() * 5.0).round();
    ScanReading {
        dims,
        weight_lbs,
        material: random_material(rng),
        confidence_pct: rng.gen_range(85..=97),
    }
}

/// Quick-add bag, labelled with the id it is about to receive
pub fn random_bag(rng: &mut impl Rng, next_id: u32) -> NewLuggage {
    let dims = Dimensions::new(
        rng.gen_range(18..=23) as f64,
        rng.gen_range(10..=14) as f64,
        rng.gen_range(6..=10) as f64,
    );
    NewLuggage {
        label: format!("Bag #{}", next_id),
        dims,
        weight_lbs: rng.gen_range(10..=24) as f64,
        material: Some(random_material(rng)),
        confidence_pct: manual_confidence(rng),
    }
}

/// Confidence recorded for bags entered by hand
pub fn manual_confidence(rng: &mut impl Rng) -> u8 {
    rng.gen_range(75..=94)
}

fn random_material(rng: &mut impl Rng) -> Material {
    Material::ALL[rng.gen_range(0..Material::ALL.len())]
}
