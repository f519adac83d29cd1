//! In-memory item store.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::id::{IdGenerator, UuidGenerator};
use super::{CreateItemRequest, Item, ItemStore, StoreError};

/// Item store backed by a `Vec` behind a read/write lock.
///
/// Lookups scan linearly by id. Mutations hold the write lock for the whole
/// operation, so concurrent requests never observe a half-applied change.
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
    ids: Box<dyn IdGenerator>,
}

impl MemoryItemStore {
    /// Empty store issuing random UUIDv4 ids.
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    /// Empty store drawing ids from `ids`.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            ids: Box::new(ids),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryItemStore")
            .field("items", &*self.items.read())
            .finish_non_exhaustive()
    }
}

fn position(items: &[Item], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn get_all_items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.read().clone())
    }

    async fn get_item(&self, id: &str) -> Result<Item, StoreError> {
        let items = self.items.read();
        position(&items, id)
            .map(|idx| items[idx].clone())
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn create_item(&self, request: CreateItemRequest) -> Result<Item, StoreError> {
        let mut items = self.items.write();

        let id = self.ids.next_id();
        if id.is_empty() {
            return Err(StoreError::storage("id generator returned an empty id"));
        }
        if position(&items, &id).is_some() {
            return Err(StoreError::storage(format!(
                "id generator returned duplicate id '{}'",
                id
            )));
        }

        let item = Item::from_request(id, request);
        items.push(item.clone());
        tracing::debug!(id = %item.id, total = items.len(), "item created");
        Ok(item)
    }

    async fn update_item(
        &self,
        id: &str,
        request: CreateItemRequest,
    ) -> Result<Item, StoreError> {
        let mut items = self.items.write();
        let idx = position(&items, id).ok_or_else(|| StoreError::not_found(id))?;

        items[idx] = Item::from_request(id, request);
        tracing::debug!(id, "item updated");
        Ok(items[idx].clone())
    }

    async fn delete_item(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.write();
        let idx = position(&items, id).ok_or_else(|| StoreError::not_found(id))?;

        items.remove(idx);
        tracing::debug!(id, remaining = items.len(), "item deleted");
        Ok(())
    }
}
