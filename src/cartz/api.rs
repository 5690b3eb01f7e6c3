//! # API Facade
//!
//! [`CartzApi`] is the single entry point for every UI that drives the
//! list. It is a thin facade over the command layer: it dispatches,
//! passes boundary inputs through (ids as integers, name and quantity as
//! raw text), and returns structured [`CmdResult`] values. It never
//! prints, never exits, and holds no presentation state.
//!
//! Generic over [`DataStore`] so the same facade runs against any
//! backend; in practice that is [`crate::store::memory::MemoryStore`].
//!
//! All calls are synchronous and run to completion: the intended caller
//! is a single-threaded UI event loop, so an operation either applies
//! fully or returns an error having changed nothing.

use crate::commands;
use crate::error::Result;
use crate::model::ItemId;
use crate::store::DataStore;

/// The main API facade for shopping-list operations.
pub struct CartzApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> CartzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add an item. `quantity` is the raw text the user typed; it must
    /// parse to a whole number of 0 or more. The created item, id
    /// included, comes back in `affected_items`.
    pub fn add_item(&mut self, name: &str, quantity: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, quantity)
    }

    /// Open the inline editor for `id`; any other open editor closes.
    pub fn begin_edit(&mut self, id: ItemId) -> Result<commands::CmdResult> {
        commands::edit::begin(&mut self.store, id)
    }

    /// Commit the edit of `id` with new name and quantity text.
    pub fn finish_edit(
        &mut self,
        id: ItemId,
        name: &str,
        quantity: &str,
    ) -> Result<commands::CmdResult> {
        commands::edit::finish(&mut self.store, id, name, quantity)
    }

    /// Remove the item with `id`.
    pub fn remove_item(&mut self, id: ItemId) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    /// Read-only snapshot of the list in insertion order.
    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
