mod cargo;
mod instance;
mod pallet_type;
mod transport_unit;

#[doc(inline)]
pub use cargo::Cargo;
#[doc(inline)]
pub use instance::LoadInstance;
#[doc(inline)]
pub use pallet_type::PalletType;
#[doc(inline)]
pub use transport_unit::TransportUnit;

use crate::{Result, StowageError};

/// Rejects zero, negative and non-finite values for a linear dimension or weight.
pub(crate) fn ensure_positive(entity: &str, field: &'static str, value: f32) -> Result<f32> {
    match value.is_finite() && value > 0.0 {
        true => Ok(value),
        false => Err(StowageError::InvalidDimension {
            entity: entity.to_string(),
            field,
            value,
        }),
    }
}
