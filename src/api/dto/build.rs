//! DTOs for the short URL build endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /v1/shorturl/build`.
///
/// The URL shape itself is checked by the lifecycle service; the derive only
/// bounds the payload size.
#[derive(Debug, Deserialize, Validate)]
pub struct BuildRequest {
    /// Destination URL to shorten.
    #[validate(length(min = 1, max = 2048, message = "url must be 1-2048 characters"))]
    pub url: String,

    /// Optional expiry timestamp; defaults to 90 days after creation.
    #[serde(default, deserialize_with = "super::datetime::option_flexible")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response body carrying the absolute short link.
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub message: String,
    pub short_url: String,
}
