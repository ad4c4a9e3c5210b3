use crate::entities::ensure_positive;
use crate::{Result, StowageError};

/// A kind of pallet in the cargo, together with how many stacking units of it are loaded.
///
/// A stacking unit is `stack_count` identical pallets on top of each other. It occupies
/// the footprint of one pallet and `height * stack_count` vertically.
/// Non-stackable pallets always have a `stack_count` of 1.
#[derive(Clone, Debug, PartialEq)]
pub struct PalletType {
    label: String,
    length: f32,
    width: f32,
    height: f32,
    weight: f32,
    stackable: bool,
    stack_count: usize,
    quantity: usize,
}

impl PalletType {
    /// Creates a non-stackable pallet type.
    /// `length`, `width`, `height` and `weight` describe a single pallet.
    pub fn try_new(
        label: impl Into<String>,
        length: f32,
        width: f32,
        height: f32,
        weight: f32,
        quantity: usize,
    ) -> Result<Self> {
        let label = label.into();
        let entity = format!("pallet type {label:?}");
        Ok(PalletType {
            length: ensure_positive(&entity, "length", length)?,
            width: ensure_positive(&entity, "width", width)?,
            height: ensure_positive(&entity, "height", height)?,
            weight: ensure_positive(&entity, "weight", weight)?,
            label,
            stackable: false,
            stack_count: 1,
            quantity,
        })
    }

    /// Marks the pallet type as stackable, with `stack_count` pallets per stacking unit.
    pub fn with_stacking(mut self, stack_count: usize) -> Result<Self> {
        if stack_count == 0 {
            return Err(StowageError::InvalidStackConfiguration {
                label: self.label,
                stackable: true,
                stack_count,
            });
        }
        self.stackable = true;
        self.stack_count = stack_count;
        Ok(self)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height of a single pallet
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Weight of a single pallet
    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn stackable(&self) -> bool {
        self.stackable
    }

    pub fn stack_count(&self) -> usize {
        self.stack_count
    }

    /// Number of stacking units of this type
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Vertical space taken by one stacking unit
    pub fn stack_height(&self) -> f32 {
        self.height * self.stack_count as f32
    }

    pub fn footprint_area(&self) -> f32 {
        self.length * self.width
    }

    /// Volume of one stacking unit
    pub fn unit_volume(&self) -> f32 {
        self.footprint_area() * self.stack_height()
    }

    /// Volume demanded by all stacking units of this type
    pub fn total_volume(&self) -> f32 {
        self.unit_volume() * self.quantity as f32
    }

    /// Weight demanded by this type, counted per pallet instance in `quantity`
    pub fn total_weight(&self) -> f32 {
        self.weight * self.quantity as f32
    }
}
