//! Handler for the mapping update endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::update::UpdateRequest;
use crate::domain::entities::ShortUrlPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Updates a mapping's destination URL and/or expiry.
///
/// # Endpoint
///
/// `PUT /v1/shorturl/{id}`
///
/// At least one of `url`/`expires_at` must be present. A changed URL resets
/// the visit counter to 0; `updated_at` is refreshed either way.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity when the payload is empty, the URL does
/// not match the accepted shape, or the expiry is not in the future.
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn update_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    if payload.is_empty() {
        return Err(AppError::validation(
            "body",
            "At least one parameter must be present",
            "value_error",
        ));
    }

    let patch = ShortUrlPatch {
        url: payload.url,
        expires_at: payload.expires_at,
    };

    state.shorturl_service.update(&id, patch).await?;

    Ok(Json(MessageResponse::new("ShortURL updated")))
}
