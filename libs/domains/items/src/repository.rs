use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::ItemResult;
use crate::models::{Item, ItemId, ItemPayload};

/// Repository trait for Item storage
///
/// Every call is atomic with respect to every other call on the same
/// repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Snapshot of all items, in no particular order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Store a new item under the next id
    async fn create(&self, payload: ItemPayload) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>>;

    /// Replace the item at `id`; `None` when absent (nothing is written)
    async fn update(&self, id: ItemId, payload: ItemPayload) -> ItemResult<Option<Item>>;

    /// Delete an item by ID; `false` when absent
    async fn delete(&self, id: ItemId) -> ItemResult<bool>;

    /// Number of stored items
    async fn count(&self) -> ItemResult<usize>;
}

/// Items plus the id counter; only ever touched under the repository lock.
#[derive(Debug)]
struct ItemTable {
    items: HashMap<ItemId, Item>,
    next_id: ItemId,
}

impl Default for ItemTable {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ItemRepository
///
/// One mutex guards both the map and the counter, so operations are strictly
/// serialized. Clones share the same table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    table: Arc<Mutex<ItemTable>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let table = self.table.lock().await;
        Ok(table.items.values().cloned().collect())
    }

    async fn create(&self, payload: ItemPayload) -> ItemResult<Item> {
        let mut table = self.table.lock().await;

        let id = table.next_id;
        table.next_id += 1;

        let item = Item::from_payload(id, payload);
        table.items.insert(id, item.clone());
        drop(table);

        tracing::info!(item_id = id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let table = self.table.lock().await;
        Ok(table.items.get(&id).cloned())
    }

    async fn update(&self, id: ItemId, payload: ItemPayload) -> ItemResult<Option<Item>> {
        let mut table = self.table.lock().await;

        let Some(slot) = table.items.get_mut(&id) else {
            return Ok(None);
        };
        *slot = Item::from_payload(id, payload);
        let updated = slot.clone();
        drop(table);

        tracing::info!(item_id = id, "Updated item");
        Ok(Some(updated))
    }

    async fn delete(&self, id: ItemId) -> ItemResult<bool> {
        let removed = self.table.lock().await.items.remove(&id).is_some();

        if removed {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(removed)
    }

    async fn count(&self) -> ItemResult<usize> {
        Ok(self.table.lock().await.items.len())
    }
}
