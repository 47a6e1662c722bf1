//! MyBackpack Core
//!
//! Layered model for the packing list:
//! - domain: Items, categories, trip types and form drafts
//! - persistence: Key-value storage abstraction and the JSON codec
//! - store: The per-trip packing list with selection state

pub mod domain;
pub mod persistence;
pub mod store;

pub use domain::{
    format_weight, Category, Entity, Item, ItemDraft, ItemId, ItemPatch, Position, TripType,
    ValidationError, MAX_SAFE_ID,
};
pub use persistence::{MemoryStore, PersistenceError, PersistenceStore, StorageError};
pub use store::{PackingList, Selection, PLACEMENT_BOUND};
