//! Handler for the short URL build endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::build::{BuildRequest, BuildResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new short URL.
///
/// # Endpoint
///
/// `POST /v1/shorturl/build`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://www.google.com",
///   "expires_at": "2026-12-31T23:59:59"   // optional, default: +90 days
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "ShortURL created successfully",
///   "short_url": "http://localhost:8080/v1/LTMGmJ3"
/// }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity with field-level errors when the URL
/// does not match the accepted shape or the expiry is not in the future.
pub async fn build_handler(
    State(state): State<AppState>,
    Json(payload): Json<BuildRequest>,
) -> Result<Json<BuildResponse>, AppError> {
    payload.validate()?;

    tracing::info!(url = %payload.url, "building short URL");

    let mapping = state
        .shorturl_service
        .build(payload.url, payload.expires_at)
        .await?;

    let short_url = state
        .shorturl_service
        .short_link(&state.base_url, &mapping.id);

    Ok(Json(BuildResponse {
        message: "ShortURL created successfully".to_string(),
        short_url,
    }))
}
