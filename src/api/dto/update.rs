//! DTOs for the mapping update endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Request body for `PUT /v1/shorturl/{id}`.
///
/// Both fields are optional but at least one must be present; the handler
/// rejects an empty payload. Changing `url` resets the visit counter.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRequest {
    /// New destination URL.
    #[validate(length(min = 1, max = 2048, message = "url must be 1-2048 characters"))]
    pub url: Option<String>,

    /// New expiry timestamp; must be strictly in the future.
    #[serde(default, deserialize_with = "super::datetime::option_flexible")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl UpdateRequest {
    /// True when neither field was supplied.
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.expires_at.is_none()
    }
}

/// Query parameters for `PATCH /v1/shorturl/{id}`.
///
/// The raw string is kept so the handler can distinguish an absent or empty
/// value from an unparseable one.
#[derive(Debug, Deserialize)]
pub struct ExpirationQuery {
    pub expire_date: Option<String>,
}
