use log::debug;

use crate::entities::{Cargo, PalletType, TransportUnit};
use crate::planning::axis_fit;
use crate::util::assertions;

/// Split of a single pallet type's quantity into what is estimated to fit and what overflows.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementRecord {
    pub label: String,
    /// Dimensions of a single pallet
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub weight: f32,
    pub stackable: bool,
    pub stack_count: usize,
    pub accommodated_count: usize,
    pub overflow_count: usize,
}

impl PlacementRecord {
    /// Quantity of the pallet type this record was derived from
    pub fn quantity(&self) -> usize {
        self.accommodated_count + self.overflow_count
    }
}

/// Placement records for every pallet type of a [`Cargo`], in insertion order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Plan {
    pub records: Vec<PlacementRecord>,
}

impl Plan {
    pub fn total_accommodated(&self) -> usize {
        self.records.iter().map(|r| r.accommodated_count).sum()
    }

    pub fn total_overflow(&self) -> usize {
        self.records.iter().map(|r| r.overflow_count).sum()
    }

    pub fn has_overflow(&self) -> bool {
        self.total_overflow() > 0
    }

    /// Records of the pallet types that did not fully fit
    pub fn overflowing(&self) -> impl Iterator<Item = &PlacementRecord> {
        self.records.iter().filter(|r| r.overflow_count > 0)
    }
}

/// Estimates, for every pallet type in insertion order, how many stacking units fit in `unit`.
///
/// Every type is evaluated against the empty unit: space consumed by earlier
/// types is not subtracted. The result is an upper bound per type, not a packing.
pub fn plan_placement(unit: &TransportUnit, cargo: &Cargo) -> Plan {
    let plan = Plan {
        records: cargo
            .pallet_types()
            .iter()
            .map(|pt| place_pallet_type(unit, pt))
            .collect(),
    };

    debug_assert!(assertions::plan_matches_cargo(&plan, cargo));

    plan
}

fn place_pallet_type(unit: &TransportUnit, pallet_type: &PalletType) -> PlacementRecord {
    let fit = axis_fit(unit, pallet_type);
    let accommodated_count = usize::min(pallet_type.quantity(), fit.capacity());
    let overflow_count = pallet_type.quantity() - accommodated_count;

    debug!(
        "[PLAN] {:?}: grid {}x{}x{} = {}, accommodated {}, overflow {}",
        pallet_type.label(),
        fit.along_length,
        fit.along_width,
        fit.along_height,
        fit.capacity(),
        accommodated_count,
        overflow_count
    );

    PlacementRecord {
        label: pallet_type.label().to_string(),
        length: pallet_type.length(),
        width: pallet_type.width(),
        height: pallet_type.height(),
        weight: pallet_type.weight(),
        stackable: pallet_type.stackable(),
        stack_count: pallet_type.stack_count(),
        accommodated_count,
        overflow_count,
    }
}
