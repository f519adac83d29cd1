//! # items-api
//!
//! A small HTTP CRUD service for a single resource, the [`Item`].
//!
//! The crate pairs an [`ItemStore`] contract with an in-memory backend
//! ([`MemoryItemStore`]) and an axum router ([`server::app_router`]) that
//! maps the item routes onto it.

pub mod config;
pub mod server;
pub mod stores;

pub use config::ServerConfig;
pub use server::app_router;
pub use stores::{CreateItemRequest, Item, ItemStore, MemoryItemStore, StoreError};

/// Crate version reported at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
