//! Selection State
//!
//! Decides which form the presentation layer shows: none, edit or add.

use crate::domain::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No form open
    #[default]
    Idle,
    /// Edit form for an existing item
    Editing(ItemId),
    /// Empty add form
    Adding,
}

impl Selection {
    pub fn editing_id(&self) -> Option<ItemId> {
        match self {
            Selection::Editing(id) => Some(*id),
            _ => None,
        }
    }
}
