//! Domain Layer
//!
//! Contains the packing list entities and their validation rules.
//! This layer has no storage or UI dependencies.

mod entity;
mod category;
mod trip;
mod item;
mod draft;

pub use entity::{Entity, ValidationError};
pub use category::Category;
pub use trip::TripType;
pub use item::{format_weight, Item, ItemId, Position, MAX_SAFE_ID};
pub use draft::{ItemDraft, ItemPatch};
