//! Packing List Store
//!
//! Holds the active trip's items and writes them back to the injected
//! [`PersistenceStore`] after every change. Storage failures are logged and
//! never reach the caller: a failed read yields an empty list, a failed write
//! leaves the in-memory list authoritative for the session.

mod ids;
mod selection;


use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Item, ItemDraft, ItemId, ItemPatch, Position, TripType, ValidationError};
use crate::persistence::{decode_items, encode_items, storage_key, PersistenceError, PersistenceStore};
use ids::{now_millis, IdAllocator};

pub use selection::Selection;

/// New items are placed uniformly in `[0, PLACEMENT_BOUND)` on each axis
pub const PLACEMENT_BOUND: f64 = 300.0;

pub struct PackingList<S, R = StdRng> {
    storage: S,
    rng: R,
    ids: IdAllocator,
    trip: TripType,
    items: Vec<Item>,
    selection: Selection,
}

impl<S: PersistenceStore> PackingList<S> {
    /// Open the list for `trip`, loading whatever is stored for it
    pub fn open(storage: S, trip: TripType) -> Self {
        Self::with_rng(storage, trip, StdRng::from_entropy())
    }
}

impl<S: PersistenceStore, R: Rng> PackingList<S, R> {
    /// Open with an explicit random source for initial placement
    pub fn with_rng(storage: S, trip: TripType, rng: R) -> Self {
        let items = load_items(&storage, trip);
        Self {
            storage,
            rng,
            ids: IdAllocator::default(),
            trip,
            items,
            selection: Selection::Idle,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn trip(&self) -> TripType {
        self.trip
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item weights in kilograms
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The item open in the edit form, if any
    pub fn selected_item(&self) -> Option<&Item> {
        self.selection.editing_id().and_then(|id| self.get(id))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    // ========================
    // Trip switching
    // ========================

    /// Swap in the stored list for `trip` (or an empty one) and close any form
    pub fn select_trip(&mut self, trip: TripType) {
        self.trip = trip;
        self.items = load_items(&self.storage, trip);
        self.selection = Selection::Idle;
    }

    // ========================
    // Mutations
    // ========================

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item, ValidationError> {
        let draft = ItemDraft::new(draft.name, draft.category, draft.weight)?;
        let id = self.ids.next(now_millis(), &self.items);
        let position = Position::new(
            self.rng.gen_range(0.0..PLACEMENT_BOUND),
            self.rng.gen_range(0.0..PLACEMENT_BOUND),
        );
        let item = Item::new(id, draft.name, draft.category, draft.weight, position);
        self.items.push(item.clone());
        self.persist();
        self.selection = Selection::Idle;
        Ok(item)
    }

    /// Apply `patch` to the item with `id`. Unknown ids are ignored (`Ok(None)`).
    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> Result<Option<Item>, ValidationError> {
        let patch = patch.validated()?;
        let updated = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                *item = item.with_patch(&patch);
                Some(item.clone())
            }
            None => {
                log::debug!("[STORE] update ignored, no item {id}");
                None
            }
        };
        // An empty patch changes nothing, so there is nothing to write
        if updated.is_some() && !patch.is_empty() {
            self.persist();
        }
        self.selection = Selection::Idle;
        Ok(updated)
    }

    /// Remove the item with `id`, returning it if it existed
    pub fn delete_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id);
        let removed = index.map(|index| self.items.remove(index));
        if removed.is_some() {
            self.persist();
        }
        self.selection = Selection::Idle;
        removed
    }

    /// Move an item's icon. Returns `Ok(false)` for unknown ids.
    pub fn reposition_item(&mut self, id: ItemId, x: f64, y: f64) -> Result<bool, ValidationError> {
        let position = Position::new(x, y);
        if !position.is_finite() {
            return Err(ValidationError::InvalidPosition);
        }
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        *item = item.moved_to(position);
        self.persist();
        Ok(true)
    }

    // ========================
    // Selection
    // ========================

    /// Open the edit form for `id`. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: ItemId) {
        if self.get(id).is_some() {
            self.selection = Selection::Editing(id);
        }
    }

    pub fn select_for_add(&mut self) {
        self.selection = Selection::Adding;
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::Idle;
    }

    fn persist(&mut self) {
        let key = storage_key(self.trip);
        let result = encode_items(&self.items)
            .and_then(|raw| self.storage.set(&key, &raw).map_err(PersistenceError::from));
        match result {
            Ok(()) => log::debug!("[STORE] Saved {} items to {key}", self.items.len()),
            Err(e) => log::error!("[STORE] Failed to save items for {}: {e}", self.trip),
        }
    }
}

fn read_items<S: PersistenceStore>(storage: &S, trip: TripType) -> Result<Vec<Item>, PersistenceError> {
    match storage.get(&storage_key(trip))? {
        Some(raw) => decode_items(&raw),
        None => Ok(Vec::new()),
    }
}

fn load_items<S: PersistenceStore>(storage: &S, trip: TripType) -> Vec<Item> {
    match read_items(storage, trip) {
        Ok(items) => {
            log::debug!("[STORE] Loaded {} items for {trip}", items.len());
            items
        }
        Err(e) => {
            log::error!("[STORE] Failed to load items for {trip}: {e}");
            Vec::new()
        }
    }
}
