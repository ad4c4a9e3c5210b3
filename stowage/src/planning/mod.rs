mod grid;
mod planner;

#[doc(inline)]
pub use grid::{AxisFit, axis_fit};
#[doc(inline)]
pub use planner::{Plan, PlacementRecord, plan_placement};
