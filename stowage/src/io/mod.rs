/// External (serializable) representations of load instances and plans
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::{export_instance, export_plan};
#[doc(inline)]
pub use import::{import_cargo, import_instance, import_unit};
