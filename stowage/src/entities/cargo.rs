use crate::entities::PalletType;
use crate::{Result, StowageError};

/// Ordered collection of pallet types to be loaded.
/// Insertion order is the placement priority: first in, first placed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cargo {
    pallet_types: Vec<PalletType>,
}

impl Cargo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a new pallet type.
    /// On error the collection is left untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn add_pallet_type(
        &mut self,
        label: impl Into<String>,
        length: f32,
        width: f32,
        height: f32,
        weight: f32,
        stackable: bool,
        quantity: usize,
        stack_count: usize,
    ) -> Result<&PalletType> {
        let pallet_type = PalletType::try_new(label, length, width, height, weight, quantity)?;
        let pallet_type = match (stackable, stack_count) {
            (true, _) => pallet_type.with_stacking(stack_count)?,
            (false, 1) => pallet_type,
            (false, _) => {
                return Err(StowageError::InvalidStackConfiguration {
                    label: pallet_type.label().to_string(),
                    stackable,
                    stack_count,
                });
            }
        };
        Ok(self.push(pallet_type))
    }

    /// Appends an already validated pallet type.
    pub fn push(&mut self, pallet_type: PalletType) -> &PalletType {
        self.pallet_types.push(pallet_type);
        &self.pallet_types[self.pallet_types.len() - 1]
    }

    pub fn pallet_types(&self) -> &[PalletType] {
        &self.pallet_types
    }

    pub fn len(&self) -> usize {
        self.pallet_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pallet_types.is_empty()
    }

    /// Sum of the volume of all stacking units
    pub fn total_volume(&self) -> f32 {
        self.pallet_types.iter().map(|pt| pt.total_volume()).sum()
    }

    /// Sum of the weight of all pallets
    pub fn total_weight(&self) -> f32 {
        self.pallet_types.iter().map(|pt| pt.total_weight()).sum()
    }

    /// Number of stacking units over all pallet types
    pub fn total_quantity(&self) -> usize {
        self.pallet_types.iter().map(|pt| pt.quantity()).sum()
    }

    /// Floor area needed if every stacking unit were placed side by side
    pub fn total_footprint_area(&self) -> f32 {
        self.pallet_types
            .iter()
            .map(|pt| pt.footprint_area() * pt.quantity() as f32)
            .sum()
    }
}
