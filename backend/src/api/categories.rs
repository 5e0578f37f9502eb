//! Category management API handlers
//!
//! Contains HTTP request handlers for category CRUD operations, plus the two
//! dispatchers that map a request on `/api/categories` or
//! `/api/categories/{id}` to one of them.

use crate::api::routes::{CollectionRoute, ItemRoute};
use crate::api::utils::{decode_category_body, parse_category_id};
use crate::error::AppError;
use crate::state::{Category, CategoryId, SharedState};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::info;

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// `/api/categories` - dispatch on method
pub async fn categories_collection(
    State(state): State<SharedState>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    let response = match CollectionRoute::try_from(&method)? {
        CollectionRoute::List => list_categories(State(state)).await?.into_response(),
        CollectionRoute::Create => create_category(State(state), body).await?.into_response(),
    };
    Ok(response)
}

/// `/api/categories/{id}` - dispatch on method, then parse the ID
pub async fn category_item(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Response, AppError> {
    let route = ItemRoute::try_from(&method)?;
    let id = parse_category_id(uri.path())?;

    let response = match route {
        ItemRoute::Get => get_category(State(state), id).await?.into_response(),
        ItemRoute::Update => update_category(State(state), id, body)
            .await?
            .into_response(),
        ItemRoute::Delete => delete_category(State(state), id).await?.into_response(),
    };
    Ok(response)
}

/// GET /api/categories - List all categories
pub async fn list_categories(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let state = state.read().await;
    Ok(Json(state.categories().to_vec()))
}

/// POST /api/categories - Create a new category
pub async fn create_category(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let payload = decode_category_body(&body)?;

    let mut state = state.write().await;
    let category = state.create_category(payload);
    info!(category_id = category.id, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/{id} - Get a specific category
pub async fn get_category(
    State(state): State<SharedState>,
    id: CategoryId,
) -> Result<Json<Category>, AppError> {
    let state = state.read().await;
    let category = state
        .get_category(id)
        .ok_or(AppError::CategoryNotFound(id))?;

    Ok(Json(category.clone()))
}

/// PUT /api/categories/{id} - Replace a category
///
/// The body is decoded before the lookup, so a bad body on a missing ID is
/// still a 400.
pub async fn update_category(
    State(state): State<SharedState>,
    id: CategoryId,
    body: Bytes,
) -> Result<Json<Category>, AppError> {
    let payload = decode_category_body(&body)?;

    let mut state = state.write().await;
    let category = state
        .update_category(id, payload)
        .ok_or(AppError::CategoryNotFound(id))?;
    info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /api/categories/{id} - Delete a category
pub async fn delete_category(
    State(state): State<SharedState>,
    id: CategoryId,
) -> Result<Json<MessageResponse>, AppError> {
    let mut state = state.write().await;
    state
        .remove_category(id)
        .ok_or(AppError::CategoryNotFound(id))?;
    info!(category_id = id, "Category deleted");

    Ok(Json(MessageResponse {
        message: "Category deleted".to_string(),
    }))
}
