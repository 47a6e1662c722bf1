//! Item Entity
//!
//! A single packable object with its place on the backpack canvas.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::draft::ItemPatch;
use super::entity::Entity;

/// Largest id a browser can hold exactly (`Number.MAX_SAFE_INTEGER`)
pub const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// Stable item identifier, stored as a plain JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canvas coordinates of an item's icon
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A packing item
///
/// Serialized field order matches the stored format: `id, name, category, weight, x, y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    /// Kilograms, finite and non-negative
    pub weight: f64,
    pub x: f64,
    pub y: f64,
}

impl Item {
    pub fn new(id: ItemId, name: String, category: Category, weight: f64, position: Position) -> Self {
        Self {
            id,
            name,
            category,
            weight,
            x: position.x,
            y: position.y,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Copy of this item with the patch's fields applied. The id is never touched.
    pub fn with_patch(&self, patch: &ItemPatch) -> Self {
        let position = patch.position.unwrap_or_else(|| self.position());
        Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            category: patch.category.unwrap_or(self.category),
            weight: patch.weight.unwrap_or(self.weight),
            x: position.x,
            y: position.y,
        }
    }

    /// Copy of this item moved to `position`
    pub fn moved_to(&self, position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self.clone()
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Two-decimal kilogram display, e.g. `4.30`
pub fn format_weight(weight: f64) -> String {
    format!("{:.2}", weight)
}
