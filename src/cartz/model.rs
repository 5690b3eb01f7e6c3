use serde::{Deserialize, Serialize};

/// Store-assigned identifier for an item.
///
/// Ids come from a counter that only ever moves forward, so an id stays
/// unique for the lifetime of the store even after the item it belonged
/// to is removed.
pub type ItemId = u32;

/// A single entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    // Transient UI state: this item's inline editor is open.
    pub is_editing: bool,
}

impl Item {
    pub fn new(id: ItemId, name: String, quantity: u32) -> Self {
        Self {
            id,
            name,
            quantity,
            is_editing: false,
        }
    }
}
