use itertools::Itertools;
use log::error;

use crate::entities::{Cargo, PalletType};
use crate::planning::Plan;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn pallet_type_is_consistent(pt: &PalletType) -> bool {
    pt.stack_count() >= 1 && (pt.stackable() || pt.stack_count() == 1)
}

/// A plan holds exactly one record per pallet type, in the same order, and every
/// record splits the full quantity of its type.
pub fn plan_matches_cargo(plan: &Plan, cargo: &Cargo) -> bool {
    if plan.records.len() != cargo.len() {
        error!(
            "plan has {} records for {} pallet types",
            plan.records.len(),
            cargo.len()
        );
        return false;
    }
    plan.records
        .iter()
        .zip_eq(cargo.pallet_types())
        .all(|(record, pt)| {
            let matches = record.label == pt.label()
                && record.quantity() == pt.quantity()
                && pallet_type_is_consistent(pt);
            if !matches {
                error!("record {record:?} does not match pallet type {pt:?}");
            }
            matches
        })
}
