//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /v1/{id}`
///
/// Every successful redirect increments the mapping's visit counter; the
/// increment is atomic in the store and does not refresh `updated_at`.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.shorturl_service.redirect(&id).await?;

    debug!(%id, %url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
