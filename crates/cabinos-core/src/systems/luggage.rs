//! Luggage manifest for one overhead bin, plus carry-on compliance.

use serde::{Deserialize, Serialize};

use crate::components::{BinCapacity, Dimensions, LuggageItem, Material};
use crate::error::{CabinError, Result};
use crate::systems::stats;

/// Largest bag accepted as a carry-on, in inches
pub const CARRY_ON_LIMIT: Dimensions = Dimensions {
    h: 22.0,
    w: 14.0,
    d: 9.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compliance {
    CarryOnOk,
    GateCheck,
}

pub fn carry_on_compliance(dims: &Dimensions) -> Compliance {
    if dims.h <= CARRY_ON_LIMIT.h && dims.w <= CARRY_ON_LIMIT.w && dims.d <= CARRY_ON_LIMIT.d {
        Compliance::CarryOnOk
    } else {
        Compliance::GateCheck
    }
}

/// Input for a new bag, before it gets an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLuggage {
    pub label: String,
    pub dims: Dimensions,
    pub weight_lbs: f64,
    /// Falls back to [`Material::default`]
    pub material: Option<Material>,
    pub confidence_pct: u8,
}

/// Bags assigned to one bin. Ids are handed out in increasing order and
/// never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredManifest")]
pub struct LuggageManifest {
    items: Vec<LuggageItem>,
    bin: BinCapacity,
    bin_label: String,
    next_id: u32,
}

#[derive(Deserialize)]
struct StoredManifest {
    items: Vec<LuggageItem>,
    bin: BinCapacity,
    bin_label: String,
    next_id: u32,
}

impl From<StoredManifest> for LuggageManifest {
    fn from(stored: StoredManifest) -> Self {
        // ids are never reused, whatever the stored counter says
        let after_last = stored.items.iter().map(|i| i.id + 1).max().unwrap_or(1);
        Self {
            items: stored.items,
            bin: stored.bin,
            bin_label: stored.bin_label,
            next_id: stored.next_id.max(after_last),
        }
    }
}

impl LuggageManifest {
    pub fn new(bin: BinCapacity, bin_label: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            bin,
            bin_label: bin_label.into(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[LuggageItem] {
        &self.items
    }

    pub fn item(&self, id: u32) -> Option<&LuggageItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn bin(&self) -> &BinCapacity {
        &self.bin
    }

    pub fn bin_label(&self) -> &str {
        &self.bin_label
    }

    /// Move the manifest to another bin. Stowed bags follow it.
    pub fn set_bin(&mut self, bin: BinCapacity, bin_label: impl Into<String>) {
        self.bin = bin;
        self.bin_label = bin_label.into();
        for item in &mut self.items {
            item.assigned_bin = self.bin_label.clone();
        }
        log::info!(
            "Luggage moved to bin {} ({} bags, {}% used)",
            self.bin_label,
            self.items.len(),
            self.capacity_pct()
        );
    }

    /// Id the next added bag will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate and store a bag in this manifest's bin.
    pub fn add_item(&mut self, new: NewLuggage) -> Result<&LuggageItem> {
        validate_positive("height", new.dims.h)?;
        validate_positive("width", new.dims.w)?;
        validate_positive("depth", new.dims.d)?;
        validate_positive("weight", new.weight_lbs)?;

        let item = LuggageItem {
            id: self.next_id,
            label: new.label,
            dims: new.dims,
            weight_lbs: new.weight_lbs,
            material: new.material.unwrap_or_default(),
            assigned_bin: self.bin_label.clone(),
            confidence_pct: new.confidence_pct.min(100),
        };
        self.next_id += 1;

        log::info!(
            "Added luggage #{} '{}' ({}, {} lb) to bin {}",
            item.id,
            item.label,
            item.dims,
            item.weight_lbs,
            item.assigned_bin
        );
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn remove_item(&mut self, id: u32) -> Result<LuggageItem> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(CabinError::ItemNotFound(id))?;
        let removed = self.items.remove(pos);
        log::info!("Removed luggage #{} '{}'", removed.id, removed.label);
        Ok(removed)
    }

    pub fn total_volume(&self) -> f64 {
        stats::total_volume(&self.items)
    }

    pub fn bin_volume(&self) -> f64 {
        stats::bin_volume(&self.bin)
    }

    pub fn capacity_pct(&self) -> u32 {
        stats::capacity_pct(&self.items, &self.bin)
    }

    pub fn remaining_pct(&self) -> u32 {
        stats::remaining_pct(&self.items, &self.bin)
    }
}

fn validate_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        log::warn!("Rejected luggage with {} = {}", field, value);
        Err(CabinError::InvalidDimension { field, value })
    }
}
