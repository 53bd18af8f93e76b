//! In-memory item store.
//!
//! One `RwLock` guards the id -> item map; the lock is held only for the map
//! access itself. Ids are drawn while the write lock is held, so ascending id
//! order is also creation order and `list` returns items in that order.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ItemdError, Result};
use crate::id::IdAllocator;
use crate::item::{Item, NewItem};

#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<BTreeMap<u64, Item>>,
    ids: IdAllocator,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            ids: IdAllocator::new(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<u64, Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<u64, Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every item, oldest first.
    pub fn list(&self) -> Vec<Item> {
        self.read().values().cloned().collect()
    }

    pub fn get_by_id(&self, id: u64) -> Result<Item> {
        self.read().get(&id).cloned().ok_or(ItemdError::NotFound(id))
    }

    /// Assign a fresh id and store the item.
    pub fn create(&self, new: NewItem) -> Item {
        let mut items = self.write();
        let id = self.ids.next();
        let item = Item { id, title: new.title, done: new.done };
        items.insert(id, item.clone());
        item
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }
}
