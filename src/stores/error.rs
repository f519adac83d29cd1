//! Item store errors.

use thiserror::Error;

/// Errors surfaced by an [`ItemStore`](super::ItemStore) backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item with the given id exists.
    #[error("Item not found: {id}")]
    NotFound { id: String },

    /// Backend failure unrelated to the requested id.
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
