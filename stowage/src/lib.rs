//! Volume/weight feasibility checks and grid-division placement planning
//! for palletized cargo loaded into a single transport unit.

/// Transport units, pallet types and the cargo collection
pub mod entities;

/// Volume and weight capacity checks
pub mod feasibility;

/// Per pallet type estimation of how many stacking units fit and how many overflow
pub mod planning;

/// Importing load instances into and exporting plans out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::{Result, StowageError};
