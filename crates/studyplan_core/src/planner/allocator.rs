//! Weight allocator: splits weekly capacity across units by weight.
//!
//! # Invariants
//! - Allocations sum to `total_weekly_hours` (within float tolerance).
//! - No rounding happens here; fractional hours are kept for scheduling.
//! - A zero total weight falls back to an even split.

use crate::model::unit::{Unit, UnitId};
use std::collections::BTreeMap;

/// Allocated study hours per unit id.
pub type Allocations = BTreeMap<UnitId, f64>;

/// Allocates `total_weekly_hours` proportionally to each unit's weight.
///
/// Callers must pass a non-empty unit list; an empty list yields an empty map.
pub fn allocate(units: &[Unit], total_weekly_hours: f64) -> Allocations {
    if units.is_empty() {
        return Allocations::new();
    }

    let total_weight: f64 = units.iter().map(|unit| unit.weight_score).sum();
    if !(total_weight.is_finite() && total_weight > 0.0) {
        let even_share = total_weekly_hours / units.len() as f64;
        return units
            .iter()
            .map(|unit| (unit.id.clone(), even_share))
            .collect();
    }

    units
        .iter()
        .map(|unit| {
            let hours = unit.weight_score / total_weight * total_weekly_hours;
            (unit.id.clone(), hours)
        })
        .collect()
}
