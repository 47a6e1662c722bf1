//! Persistence Layer
//!
//! Key-value storage abstraction plus the JSON codec for per-trip item lists.
//! Implementations can use browser local storage, in-memory maps, etc.

mod traits;
mod memory;
mod codec;

pub use traits::{PersistenceStore, StorageError};
pub use memory::MemoryStore;
pub use codec::{decode_items, encode_items, storage_key, PersistenceError, STORAGE_KEY_PREFIX};
