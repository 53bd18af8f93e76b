use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{StatusCode, Uri},
    Json,
};

use itemd_core::{Item, NewItem};

use crate::api::ApiError;
use crate::app_state::AppState;

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store().list())
}

/// A path segment that is not a non-negative integer cannot name an item,
/// so it gets the same 404 as an unknown id.
pub async fn get_item(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id: u64 = raw
        .parse()
        .map_err(|_| ApiError::NotFound(format!("item {raw} not found")))?;

    let item = state.store().get_by_id(id).map_err(|e| {
        tracing::debug!(id, "item not found");
        e
    })?;
    Ok(Json(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(new) = payload.map_err(|r| {
        tracing::debug!(status = r.status().as_u16(), reason = %r.body_text(), "create rejected");
        r
    })?;

    let item = state.store().create(new);
    tracing::info!(id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
