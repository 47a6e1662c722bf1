//! Domain Layer - Core Entity Trait
//!
//! All stored records have a unique id that never changes after creation.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Input rejected before it reaches the collection.
///
/// The form layer shows the `Display` text to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Item name is required")]
    EmptyName,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown trip type: {0}")]
    UnknownTrip(String),
    #[error("Weight must be a number, got {0:?}")]
    InvalidWeight(String),
    #[error("Weight cannot be negative ({0} kg)")]
    NegativeWeight(f64),
    #[error("Position must be finite")]
    InvalidPosition,
}
