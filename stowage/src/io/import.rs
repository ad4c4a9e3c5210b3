use log::debug;

use crate::Result;
use crate::entities::{Cargo, LoadInstance, TransportUnit};
use crate::io::ext_repr::{ExtLoadInstance, ExtPalletType, ExtTransportUnit};

pub fn import_unit(ext_unit: &ExtTransportUnit) -> Result<TransportUnit> {
    TransportUnit::try_new(
        ext_unit.length,
        ext_unit.width,
        ext_unit.height,
        ext_unit.max_weight,
    )
}

/// Builds a [`Cargo`] in the order the pallet types are listed.
/// Fails on the first invalid pallet type.
pub fn import_cargo(ext_pallets: &[ExtPalletType]) -> Result<Cargo> {
    let mut cargo = Cargo::new();
    for ep in ext_pallets {
        cargo.add_pallet_type(
            ep.label.as_str(),
            ep.length,
            ep.width,
            ep.height,
            ep.weight,
            ep.stackable,
            ep.quantity,
            ep.stack_count,
        )?;
    }
    Ok(cargo)
}

pub fn import_instance(ext_instance: &ExtLoadInstance) -> Result<LoadInstance> {
    let unit = import_unit(&ext_instance.unit)?;
    let cargo = import_cargo(&ext_instance.pallets)?;
    debug!(
        "[IMPORT] unit {}x{}x{} (max {}), {} pallet types",
        unit.length(),
        unit.width(),
        unit.height(),
        unit.max_weight(),
        cargo.len()
    );
    Ok(LoadInstance::new(unit, cargo))
}
