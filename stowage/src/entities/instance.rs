use crate::entities::{Cargo, TransportUnit};

/// A transport unit together with the cargo that should be loaded into it.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadInstance {
    pub unit: TransportUnit,
    pub cargo: Cargo,
}

impl LoadInstance {
    pub fn new(unit: TransportUnit, cargo: Cargo) -> Self {
        Self { unit, cargo }
    }
}
