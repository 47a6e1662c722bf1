//! Application Context
//!
//! The packing list lives in one reactive signal shared via Leptos Context API.
//! Components read through the accessors and mutate only through the list's
//! operations.

use leptos::prelude::*;

use backpack_core::{Item, ItemDraft, ItemId, ItemPatch, PackingList, Selection, TripType, ValidationError};

use crate::storage::BrowserStorage;

pub type BrowserPackingList = PackingList<BrowserStorage>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct BackpackContext {
    list: RwSignal<BrowserPackingList>,
    /// Whether the item list is shown in the sidebar (view-only, not persisted)
    pub show_list: RwSignal<bool>,
}

/// Get the backpack context
pub fn use_backpack() -> BackpackContext {
    expect_context::<BackpackContext>()
}

impl BackpackContext {
    pub fn new(list: BrowserPackingList) -> Self {
        Self {
            list: RwSignal::new(list),
            show_list: RwSignal::new(false),
        }
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn trip(&self) -> TripType {
        self.list.with(|list| list.trip())
    }

    pub fn items(&self) -> Vec<Item> {
        self.list.with(|list| list.items().to_vec())
    }

    pub fn total_weight(&self) -> f64 {
        self.list.with(|list| list.total_weight())
    }

    pub fn selection(&self) -> Selection {
        self.list.with(|list| list.selection())
    }

    /// Item being edited, read without subscribing to later list changes
    pub fn selected_item_untracked(&self) -> Option<Item> {
        self.list.with_untracked(|list| list.selected_item().cloned())
    }

    // ========================
    // Operations
    // ========================

    pub fn select_trip(&self, trip: TripType) {
        log::info!("[APP] Switching to trip {}", trip);
        self.list.update(|list| list.select_trip(trip));
    }

    pub fn add_item(&self, draft: ItemDraft) -> Result<(), ValidationError> {
        self.list
            .try_update(|list| {
                list.add_item(draft).map(|item| {
                    log::info!("[APP] Added {} (#{})", item.name, item.id);
                })
            })
            .unwrap_or(Ok(()))
    }

    pub fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<(), ValidationError> {
        self.list
            .try_update(|list| list.update_item(id, patch).map(|_| ()))
            .unwrap_or(Ok(()))
    }

    pub fn delete_item(&self, id: ItemId) {
        self.list.update(|list| {
            if let Some(item) = list.delete_item(id) {
                log::info!("[APP] Deleted {} (#{})", item.name, item.id);
            }
        });
    }

    pub fn reposition_item(&self, id: ItemId, x: f64, y: f64) {
        self.list.update(|list| {
            if let Err(e) = list.reposition_item(id, x, y) {
                log::warn!("[DND] Ignoring drop for #{}: {}", id, e);
            }
        });
    }

    pub fn select(&self, id: ItemId) {
        self.list.update(|list| list.select(id));
    }

    pub fn select_for_add(&self) {
        self.list.update(|list| list.select_for_add());
    }

    pub fn clear_selection(&self) {
        self.list.update(|list| list.clear_selection());
    }
}
