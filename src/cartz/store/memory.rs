use super::DataStore;
use crate::error::{CartzError, Result};
use crate::model::{Item, ItemId};

/// In-memory item storage. Lives for the session; nothing persists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Vec<Item>,
    last_id: ItemId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: ItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartzError::ItemNotFound(id))
    }
}

impl DataStore for MemoryStore {
    fn insert_item(&mut self, name: String, quantity: u32) -> Result<Item> {
        // The counter never rewinds after a removal, so ids stay unique
        // for the whole session.
        self.last_id += 1;
        let item = Item::new(self.last_id, name, quantity);
        self.items.push(item.clone());
        Ok(item)
    }

    fn get_item(&self, id: ItemId) -> Result<Item> {
        let pos = self.position(id)?;
        Ok(self.items[pos].clone())
    }

    fn replace_item(&mut self, item: &Item) -> Result<()> {
        let pos = self.position(item.id)?;
        self.items[pos] = item.clone();
        Ok(())
    }

    fn remove_item(&mut self, id: ItemId) -> Result<()> {
        let pos = self.position(id)?;
        self.items.remove(pos);
        Ok(())
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Test Item {}", i + 1);
                self.store.insert_item(name, (i + 1) as u32).unwrap();
            }
            self
        }

        pub fn with_item(mut self, name: &str, quantity: u32) -> Self {
            self.store.insert_item(name.to_string(), quantity).unwrap();
            self
        }

        pub fn with_editing_item(mut self, name: &str, quantity: u32) -> Self {
            let mut item = self.store.insert_item(name.to_string(), quantity).unwrap();
            item.is_editing = true;
            self.store.replace_item(&item).unwrap();
            self
        }
    }
}
