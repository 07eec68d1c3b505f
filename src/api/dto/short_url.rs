//! JSON representation of a stored mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// Serialized mapping as returned by the listing and details endpoints.
#[derive(Debug, Serialize)]
pub struct ShortUrlData {
    pub id: String,
    pub url: String,
    pub visitors: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<ShortUrl> for ShortUrlData {
    fn from(mapping: ShortUrl) -> Self {
        Self {
            id: mapping.id,
            url: mapping.url,
            visitors: mapping.visitors,
            created_at: mapping.created_at,
            updated_at: mapping.updated_at,
            expires_at: mapping.expires_at,
        }
    }
}

/// Response body for `GET /v1/shorturl/{id}`.
#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub data: ShortUrlData,
}
