//! # Storage Layer
//!
//! This module defines the storage abstraction for cartz. The
//! [`DataStore`] trait lets the command layer work against any backend;
//! the one shipped implementation is [`memory::MemoryStore`], since a
//! shopping list lives exactly as long as the session that builds it.
//!
//! ## Snapshot-on-read
//!
//! Reads hand out owned [`Item`] clones, never references into the
//! store's collection. Edits therefore go through an explicit
//! [`DataStore::replace_item`] that swaps the stored value at its
//! position by id. There is no way to reach in and mutate a stored
//! item's fields through an aliased reference.
//!
//! ## Ordering
//!
//! The collection is a sequence, not a map: [`DataStore::list_items`]
//! returns items in insertion order, and [`DataStore::remove_item`]
//! preserves the relative order of everything it leaves behind.

use crate::error::Result;
use crate::model::{Item, ItemId};

pub mod memory;

/// Abstract interface for item storage.
///
/// Implementations own the items exclusively and are responsible for id
/// assignment and insertion ordering.
pub trait DataStore {
    /// Create a new item with a fresh unique id, appended after all
    /// existing items. Returns the created item, id included.
    fn insert_item(&mut self, name: String, quantity: u32) -> Result<Item>;

    /// Get a snapshot of one item by id.
    fn get_item(&self, id: ItemId) -> Result<Item>;

    /// Replace the stored item carrying `item.id`, keeping its position
    /// in the sequence.
    fn replace_item(&mut self, item: &Item) -> Result<()>;

    /// Remove an item permanently. Remaining items keep their ids and
    /// relative order.
    fn remove_item(&mut self, id: ItemId) -> Result<()>;

    /// Snapshot of all items in insertion order.
    fn list_items(&self) -> Result<Vec<Item>>;
}
