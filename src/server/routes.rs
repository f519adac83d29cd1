//! Axum route handlers for the items API.
//!
//! # Routes
//!
//! - `GET    /`            — 307 redirect to `/items/`
//! - `GET    /items/`      — List all items
//! - `POST   /items/`      — Create an item from `{"name", "description"}`
//! - `GET    /items/:id`   — Fetch one item (404 with empty body if absent)
//! - `PUT    /items/:id`   — Replace name and description
//! - `DELETE /items/:id`   — Remove an item

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use super::response::{decode_request, respond_with_error, ErrorResponse};
use crate::stores::{Item, ItemStore};

/// Router state: the store every item route operates on.
#[derive(Clone)]
pub struct ItemHandler {
    store: Arc<dyn ItemStore>,
}

impl ItemHandler {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }
}

/// Build the axum router with all routes bound to `store`.
pub fn app_router(store: Arc<dyn ItemStore>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(ItemHandler::new(store))
}

/// GET / — send clients to the collection.
async fn home_handler() -> Redirect {
    Redirect::temporary("/items/")
}

/// GET /items/
async fn list_items(
    State(handler): State<ItemHandler>,
) -> Result<Json<Vec<Item>>, ErrorResponse> {
    let items = handler.store.get_all_items().await.map_err(|e| {
        tracing::warn!(error = %e, "listing items failed");
        respond_with_error(StatusCode::INTERNAL_SERVER_ERROR, "Could not load items")
    })?;

    Ok(Json(items))
}

/// POST /items/
async fn create_item(
    State(handler): State<ItemHandler>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ErrorResponse> {
    let request = decode_request(&body)?;

    let item = handler.store.create_item(request).await.map_err(|e| {
        tracing::warn!(error = %e, "creating item failed");
        respond_with_error(StatusCode::INTERNAL_SERVER_ERROR, "Could not store item")
    })?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Path id, or `None` when it does not decode (e.g. invalid UTF-8). Such an
/// id can never match a stored item.
fn path_id(path: Result<Path<String>, PathRejection>) -> Option<String> {
    match path {
        Ok(Path(id)) => Some(id),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "undecodable item id");
            None
        }
    }
}

/// GET /items/:id
async fn get_item(
    State(handler): State<ItemHandler>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Item>, StatusCode> {
    let id = path_id(path).ok_or(StatusCode::NOT_FOUND)?;
    handler.store.get_item(&id).await.map(Json).map_err(|e| {
        tracing::debug!(error = %e, "item lookup failed");
        StatusCode::NOT_FOUND
    })
}

/// PUT /items/:id
///
/// The payload is decoded before the store is consulted, so a malformed
/// body yields 400 even for an unknown id.
async fn update_item(
    State(handler): State<ItemHandler>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Item>, Response> {
    let request = decode_request(&body).map_err(IntoResponse::into_response)?;
    let id = path_id(path).ok_or_else(|| StatusCode::NOT_FOUND.into_response())?;

    // Any store failure reads as "no such item" here.
    let item = handler.store.update_item(&id, request).await.map_err(|e| {
        tracing::debug!(error = %e, "item update failed");
        StatusCode::NOT_FOUND.into_response()
    })?;

    Ok(Json(item))
}

/// DELETE /items/:id
async fn delete_item(
    State(handler): State<ItemHandler>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ErrorResponse> {
    let delete_failed =
        || respond_with_error(StatusCode::INTERNAL_SERVER_ERROR, "Could not delete item");

    let id = path_id(path).ok_or_else(delete_failed)?;
    handler.store.delete_item(&id).await.map_err(|e| {
        tracing::warn!(error = %e, "deleting item failed");
        delete_failed()
    })?;

    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
