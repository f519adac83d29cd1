//! HTTP layer for the items API.
//!
//! Maps the item routes onto an [`ItemStore`](crate::stores::ItemStore).
//! See [`routes`] for the endpoint table.

pub mod response;
pub mod routes;

pub use routes::{app_router, ItemHandler};
