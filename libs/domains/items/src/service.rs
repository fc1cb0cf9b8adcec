//! Item Service - turns repository misses into `ItemError::NotFound`

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemId, ItemPayload};
use crate::repository::ItemRepository;

/// Item operations exposed to the HTTP layer
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    #[instrument(skip(self, payload), fields(item_name = %payload.name))]
    pub async fn create_item(&self, payload: ItemPayload) -> ItemResult<Item> {
        self.repository.create(payload).await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Full replace; the stored id is always `id`.
    #[instrument(skip(self, payload))]
    pub async fn update_item(&self, id: ItemId, payload: ItemPayload) -> ItemResult<Item> {
        self.repository
            .update(id, payload)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> ItemResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ItemError::NotFound(id));
        }
        Ok(())
    }
}
