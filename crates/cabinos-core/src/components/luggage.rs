//! Luggage components: items, dimensions, bins and packing annotations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outer dimensions of a bag, in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub h: f64,
    pub w: f64,
    pub d: f64,
}

impl Dimensions {
    pub fn new(h: f64, w: f64, d: f64) -> Self {
        Self { h, w, d }
    }

    /// Cubic inches
    pub fn volume(&self) -> f64 {
        self.h * self.w * self.d
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}\"", self.h, self.w, self.d)
    }
}

/// Shell material reported by the scanner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Hardshell,
    #[default]
    Nylon,
    Leather,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Hardshell, Material::Nylon, Material::Leather];
}

/// A bag stowed in an overhead bin.
///
/// Items are never edited in place; packing produces a [`PackedItem`] view
/// alongside the stored item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuggageItem {
    pub id: u32,
    pub label: String,
    pub dims: Dimensions,
    pub weight_lbs: f64,
    pub material: Material,
    pub assigned_bin: String,
    /// Scanner confidence, 0..=100
    pub confidence_pct: u8,
}

impl LuggageItem {
    pub fn volume(&self) -> f64 {
        self.dims.volume()
    }
}

/// Interior bound of one overhead bin, in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinCapacity {
    pub w: f64,
    pub h: f64,
    pub d: f64,
}

impl BinCapacity {
    pub fn volume(&self) -> f64 {
        self.w * self.h * self.d
    }
}

impl Default for BinCapacity {
    fn default() -> Self {
        Self {
            w: 24.0,
            h: 14.0,
            d: 36.0,
        }
    }
}

/// Layout slot inside the bin footprint, as percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x_pct: u32,
    pub y_pct: u32,
    /// 0 or 90
    pub rotation_deg: u32,
}

/// Loading instruction attached to a packed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingHint {
    AgainstWall,
    StackFlat,
    FillRemaining,
}

impl PackingHint {
    pub fn instruction(self) -> &'static str {
        match self {
            PackingHint::AgainstWall => "Place wheels-first against the left wall",
            PackingHint::StackFlat => "Stack flat on top",
            PackingHint::FillRemaining => "Fit into the remaining space",
        }
    }
}

impl fmt::Display for PackingHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.instruction())
    }
}

/// An item annotated by the packing optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedItem {
    pub item: LuggageItem,
    /// Zero-based load order, largest first
    pub rank: usize,
    pub placement: Placement,
    pub hint: PackingHint,
}
