//! First-Fit-Decreasing layout advice for a single bin.
//!
//! Items are ordered by volume, largest first, and dropped into a fixed
//! three-column grid over the bin footprint. The result is a view: stored
//! items are cloned into [`PackedItem`]s and never modified.
//!
//! There is no geometric feasibility check. Two bags can land on overlapping
//! slots, and a bin reported below 100% may still not close. Capacity is the
//! volume ratio from [`stats::capacity_pct`](super::stats::capacity_pct).

use crate::components::{LuggageItem, PackedItem, PackingHint, Placement};

/// Slots per grid row
pub const GRID_COLUMNS: usize = 3;
/// Horizontal step between slots, percent of bin width
pub const COLUMN_STEP_PCT: u32 = 33;
/// Vertical step between slot rows, percent of bin depth
pub const ROW_STEP_PCT: u32 = 50;

/// Order `items` largest-first and annotate each with a slot and a hint.
///
/// The sort is stable, so equal volumes keep their manifest order.
pub fn optimize_packing(items: &[LuggageItem]) -> Vec<PackedItem> {
    let mut order: Vec<&LuggageItem> = items.iter().collect();
    order.sort_by(|a, b| b.volume().total_cmp(&a.volume()));

    order
        .into_iter()
        .enumerate()
        .map(|(rank, item)| PackedItem {
            item: item.clone(),
            rank,
            placement: slot(rank, item),
            hint: hint_for_rank(rank),
        })
        .collect()
}

fn slot(rank: usize, item: &LuggageItem) -> Placement {
    let column = (rank % GRID_COLUMNS) as u32;
    let row = (rank / GRID_COLUMNS) as u32;
    Placement {
        x_pct: column * COLUMN_STEP_PCT,
        y_pct: row * ROW_STEP_PCT,
        rotation_deg: if item.dims.w > item.dims.h { 90 } else { 0 },
    }
}

fn hint_for_rank(rank: usize) -> PackingHint {
    match rank {
        0 => PackingHint::AgainstWall,
        1 => PackingHint::StackFlat,
        _ => PackingHint::FillRemaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Dimensions, Material};

    fn item(id: u32, h: f64, w: f64, d: f64) -> LuggageItem {
        LuggageItem {
            id,
            label: format!("Bag {}", id),
            dims: Dimensions::new(h, w, d),
            weight_lbs: 12.0,
            material: Material::Hardshell,
            assigned_bin: "12A".into(),
            confidence_pct: 90,
        }
    }

    #[test]
    fn test_orders_by_descending_volume() {
        let items = vec![
            item(1, 16.0, 12.0, 5.0),  // 960
            item(2, 22.0, 14.0, 9.0),  // 2772
            item(3, 18.0, 11.0, 10.0), // 1980
        ];
        let packed = optimize_packing(&items);
        let ids: Vec<u32> = packed.iter().map(|p| p.item.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        for pair in packed.windows(2) {
            assert!(pair[0].item.volume() >= pair[1].item.volume());
            assert!(pair[0].rank < pair[1].rank);
        }
    }

    #[test]
    fn test_hints_by_rank() {
        let items: Vec<_> = (1..=4).map(|i| item(i, 10.0 + i as f64, 5.0, 5.0)).collect();
        let hints: Vec<PackingHint> = optimize_packing(&items).iter().map(|p| p.hint).collect();
        assert_eq!(
            hints,
            vec![
                PackingHint::AgainstWall,
                PackingHint::StackFlat,
                PackingHint::FillRemaining,
                PackingHint::FillRemaining,
            ]
        );
    }

    #[test]
    fn test_grid_slots() {
        let items: Vec<_> = (1..=5).map(|i| item(i, 20.0 - i as f64, 5.0, 5.0)).collect();
        let slots: Vec<(u32, u32)> = optimize_packing(&items)
            .iter()
            .map(|p| (p.placement.x_pct, p.placement.y_pct))
            .collect();
        assert_eq!(slots, vec![(0, 0), (33, 0), (66, 0), (0, 50), (33, 50)]);
    }

    #[test]
    fn test_rotation_when_wider_than_tall() {
        let packed = optimize_packing(&[item(1, 10.0, 16.0, 5.0), item(2, 16.0, 10.0, 4.0)]);
        assert_eq!(packed[0].item.id, 1);
        assert_eq!(packed[0].placement.rotation_deg, 90);
        assert_eq!(packed[1].placement.rotation_deg, 0);
    }

    #[test]
    fn test_ties_keep_manifest_order() {
        let items = vec![item(5, 10.0, 10.0, 10.0), item(2, 10.0, 10.0, 10.0)];
        let ids: Vec<u32> = optimize_packing(&items).iter().map(|p| p.item.id).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[test]
    fn test_input_untouched() {
        let items = vec![item(1, 5.0, 5.0, 5.0), item(2, 9.0, 9.0, 9.0)];
        let before = items.clone();
        let packed = optimize_packing(&items);
        assert_eq!(items, before);
        assert_eq!(packed.len(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(optimize_packing(&[]).is_empty());
    }
}
