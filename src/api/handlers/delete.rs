//! Handler for the mapping delete endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::message::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a mapping.
///
/// # Endpoint
///
/// `DELETE /v1/shorturl/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn delete_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.shorturl_service.delete(&id).await?;

    Ok(Json(MessageResponse::new("ShortURL deleted successfully")))
}
