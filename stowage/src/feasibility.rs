use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::entities::{Cargo, TransportUnit};
use crate::util::FPA;

/// Whether the total volume of all stacking units fits in the unit's volume.
/// Equality counts as fitting.
pub fn fits_by_volume(unit: &TransportUnit, cargo: &Cargo) -> bool {
    FPA(cargo.total_volume()) <= FPA(unit.volume())
}

/// Whether the total weight of the cargo stays within the unit's payload.
/// Equality counts as fitting.
pub fn fits_by_weight(unit: &TransportUnit, cargo: &Cargo) -> bool {
    FPA(cargo.total_weight()) <= FPA(unit.max_weight())
}

/// Capacity constraint of a [`TransportUnit`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Volume,
    Weight,
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Volume => write!(f, "volume"),
            Constraint::Weight => write!(f, "weight"),
        }
    }
}

/// Outcome of both capacity checks, with the figures they were based on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    pub volume_demand: f32,
    pub volume_capacity: f32,
    pub weight_demand: f32,
    pub weight_capacity: f32,
    pub fits_by_volume: bool,
    pub fits_by_weight: bool,
    /// Floor area of all stacking units side by side. Informational, not a constraint.
    pub floor_demand: f32,
    pub floor_capacity: f32,
}

impl FeasibilityReport {
    /// Runs both checks of `cargo` against `unit`.
    pub fn check(unit: &TransportUnit, cargo: &Cargo) -> Self {
        let report = FeasibilityReport {
            volume_demand: cargo.total_volume(),
            volume_capacity: unit.volume(),
            weight_demand: cargo.total_weight(),
            weight_capacity: unit.max_weight(),
            fits_by_volume: fits_by_volume(unit, cargo),
            fits_by_weight: fits_by_weight(unit, cargo),
            floor_demand: cargo.total_footprint_area(),
            floor_capacity: unit.length() * unit.width(),
        };
        debug!(
            "[FEAS] volume {:.3}/{:.3} ({}), weight {:.3}/{:.3} ({})",
            report.volume_demand,
            report.volume_capacity,
            report.fits_by_volume,
            report.weight_demand,
            report.weight_capacity,
            report.fits_by_weight
        );
        report
    }

    /// Combined go/no-go
    pub fn fits(&self) -> bool {
        self.fits_by_volume && self.fits_by_weight
    }

    /// All constraints that are not satisfied
    pub fn violations(&self) -> Vec<Constraint> {
        [
            (Constraint::Volume, self.fits_by_volume),
            (Constraint::Weight, self.fits_by_weight),
        ]
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(c, _)| c)
        .collect()
    }

    /// Fraction of the unit's volume demanded by the cargo (can exceed 1.0)
    pub fn volume_utilization(&self) -> f32 {
        self.volume_demand / self.volume_capacity
    }

    /// Fraction of the unit's payload demanded by the cargo (can exceed 1.0)
    pub fn weight_utilization(&self) -> f32 {
        self.weight_demand / self.weight_capacity
    }

    /// Fraction of the unit's floor the stacking units would cover side by side (can exceed 1.0)
    pub fn floor_coverage(&self) -> f32 {
        self.floor_demand / self.floor_capacity
    }
}
