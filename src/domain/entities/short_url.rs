//! Short URL entity representing a stored mapping.

use chrono::{DateTime, Utc};

/// Number of days a mapping stays live when no expiry is supplied.
pub const DEFAULT_EXPIRY_DAYS: i64 = 90;

/// A stored mapping between a short identifier and a destination URL.
///
/// `id` doubles as the primary key and the public short code. `visitors`
/// counts successful redirects and is reset to 0 whenever `url` changes.
/// `updated_at` is refreshed on every mutation except the redirect visit
/// increment.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    pub id: String,
    pub url: String,
    pub visitors: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Input data for inserting a new mapping.
///
/// `created_at` and `updated_at` are assigned by the store at insert time;
/// `expires_at` is always concrete here because the service applies the
/// 90-day default before insert.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub id: String,
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

/// Partial update for an existing mapping.
///
/// `None` fields are left unchanged. A new `url` resets the visit counter;
/// `expires_at` can only be replaced, never cleared.
#[derive(Debug, Clone, Default)]
pub struct ShortUrlPatch {
    pub url: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}
