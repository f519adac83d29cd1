//! Item persistence.
//!
//! [`ItemStore`] is the contract the HTTP layer talks to. The only backend
//! today is [`MemoryItemStore`], which keeps items in process memory.

pub mod error;
pub mod id;
pub mod memory;
pub mod types;

use async_trait::async_trait;

pub use error::StoreError;
pub use id::{IdGenerator, UuidGenerator};
pub use memory::MemoryItemStore;
pub use types::{CreateItemRequest, Item};

/// Storage backend for items.
///
/// Implementations own their items; every method hands back clones.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items in the backend's current order.
    async fn get_all_items(&self) -> Result<Vec<Item>, StoreError>;

    /// The item with exactly this id, or [`StoreError::NotFound`].
    async fn get_item(&self, id: &str) -> Result<Item, StoreError>;

    /// Assign a fresh id, store the item and return it.
    async fn create_item(&self, request: CreateItemRequest) -> Result<Item, StoreError>;

    /// Replace name and description of an existing item. The id is kept.
    async fn update_item(&self, id: &str, request: CreateItemRequest)
        -> Result<Item, StoreError>;

    /// Remove an item, keeping the relative order of the rest.
    async fn delete_item(&self, id: &str) -> Result<(), StoreError>;
}
