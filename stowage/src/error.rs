use thiserror::Error;

/// Result type alias for fallible `stowage` operations.
pub type Result<T> = std::result::Result<T, StowageError>;

/// Errors raised when constructing entities from invalid input.
/// Planning and feasibility checks themselves never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StowageError {
    /// A linear dimension, weight or weight capacity is zero, negative or not finite.
    #[error("invalid dimension for {entity}: {field} must be a positive finite number, got {value}")]
    InvalidDimension {
        entity: String,
        field: &'static str,
        value: f32,
    },

    /// The stacking flag and the number of stacked pallets contradict each other.
    #[error(
        "invalid stack configuration for pallet type {label:?}: stackable = {stackable}, stack count = {stack_count}"
    )]
    InvalidStackConfiguration {
        label: String,
        stackable: bool,
        stack_count: usize,
    },
}
