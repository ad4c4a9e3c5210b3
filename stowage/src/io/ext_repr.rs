use serde::{Deserialize, Serialize};

/// External representation of a [`TransportUnit`](crate::entities::TransportUnit).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtTransportUnit {
    pub length: f32,
    pub width: f32,
    pub height: f32,
    /// Maximum payload weight
    pub max_weight: f32,
}

/// External representation of a [`PalletType`](crate::entities::PalletType).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPalletType {
    pub label: String,
    pub length: f32,
    pub width: f32,
    pub height: f32,
    /// Weight of a single pallet
    pub weight: f32,
    #[serde(default)]
    pub stackable: bool,
    /// Pallets per stacking unit, 1 if not specified
    #[serde(default = "default_stack_count")]
    pub stack_count: usize,
    /// Number of stacking units
    pub quantity: usize,
}

fn default_stack_count() -> usize {
    1
}

/// A transport unit and the pallet types to load into it, in placement priority order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLoadInstance {
    #[serde(default)]
    pub name: Option<String>,
    pub unit: ExtTransportUnit,
    pub pallets: Vec<ExtPalletType>,
}

/// External representation of a [`PlacementRecord`](crate::planning::PlacementRecord).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacementRecord {
    pub label: String,
    /// Single pallet dimensions: `[length, width, height]`
    pub dimensions: [f32; 3],
    pub weight: f32,
    pub stackable: bool,
    pub stack_count: usize,
    pub accommodated: usize,
    pub overflow: usize,
}

/// External representation of a [`Plan`](crate::planning::Plan).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlan {
    pub records: Vec<ExtPlacementRecord>,
    pub total_accommodated: usize,
    pub total_overflow: usize,
}
