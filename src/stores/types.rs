//! Wire and storage types for the item resource.

use serde::{Deserialize, Serialize};

/// Payload accepted by `POST /items/` and `PUT /items/{id}`.
///
/// Both fields default to an empty string when absent; no further
/// validation is applied. Capitalised keys are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Description")]
    pub description: String,
}

impl CreateItemRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A stored item.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Item {
    /// Build an item from a request under the given id.
    pub fn from_request(id: impl Into<String>, request: CreateItemRequest) -> Self {
        Self {
            id: id.into(),
            name: request.name,
            description: request.description,
        }
    }
}
