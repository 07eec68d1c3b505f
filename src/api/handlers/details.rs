//! Handler for the mapping details endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::short_url::DetailsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full mapping for a short identifier.
///
/// # Endpoint
///
/// `GET /v1/shorturl/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn details_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DetailsResponse>, AppError> {
    let mapping = state.shorturl_service.details(&id).await?;

    Ok(Json(DetailsResponse {
        data: mapping.into(),
    }))
}
