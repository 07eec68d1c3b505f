//! Handler for the expiration update endpoint.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::datetime::parse_flexible;
use crate::api::dto::message::MessageResponse;
use crate::api::dto::update::ExpirationQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Replaces the expiry of a mapping.
///
/// # Endpoint
///
/// `PATCH /v1/shorturl/{id}?expire_date=2026-12-31T23:59:59`
///
/// The new expiry is a query parameter and must be strictly in the future.
///
/// # Errors
///
/// Returns 400 Bad Request when `expire_date` is missing, empty,
/// unparseable, or in the past. Returns 404 Not Found if the identifier
/// doesn't exist.
pub async fn update_expiration_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Query(query): Query<ExpirationQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let raw = match query.expire_date.as_deref() {
        None | Some("") => {
            return Err(AppError::bad_request("Expire date is empty", json!({})));
        }
        Some(raw) => raw,
    };

    let expire_date = parse_flexible(raw).map_err(|reason| {
        AppError::bad_request(
            "Expire date is not a valid datetime",
            json!({ "reason": reason }),
        )
    })?;

    state
        .shorturl_service
        .update_expiration(&id, expire_date)
        .await?;

    Ok(Json(MessageResponse::new("ShortURL expire date updated")))
}
