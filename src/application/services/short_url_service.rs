//! Short URL lifecycle service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::entities::{DEFAULT_EXPIRY_DAYS, NewShortUrl, ShortUrl, ShortUrlPatch};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::short_id::generate_short_id;
use crate::utils::url_pattern::is_valid_url;

/// Lowest accepted page number; smaller values are clamped up.
const MIN_PAGE: i64 = 1;

/// Lowest accepted page size; smaller values are clamped up.
const MIN_LIMIT: i64 = 5;

/// Generation attempts before giving up on a truncated-id collision.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// One page of mappings with the clamped pagination values echoed back.
#[derive(Debug)]
pub struct ShortUrlPage {
    pub data: Vec<ShortUrl>,
    pub page: i64,
    pub limit: i64,
}

/// Service enforcing validation and invariants around mapping operations.
///
/// Orchestrates the identifier generator and the store: URL shape checks,
/// strict-future expiry checks on every write, the 90-day default expiry,
/// visit counting, and the visitors reset on URL change.
pub struct ShortUrlService<R: ShortUrlRepository> {
    repository: Arc<R>,
}

impl<R: ShortUrlRepository> ShortUrlService<R> {
    /// Creates a new service over the given store.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new mapping for `url`.
    ///
    /// When `expires_at` is absent the mapping expires 90 days from now.
    /// Identifier generation retries on a duplicate key: the 7-character
    /// truncation can collide, so a conflicting insert rolls a fresh id, up
    /// to [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not match the shape
    /// pattern or `expires_at` is not strictly in the future.
    /// Returns [`AppError::Internal`] when the attempts are exhausted or on
    /// store errors.
    pub async fn build(
        &self,
        url: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortUrl, AppError> {
        if !is_valid_url(&url) {
            return Err(AppError::validation(
                "body.url",
                "url is not valid",
                "value_error",
            ));
        }

        if let Some(expiry) = expires_at {
            Self::ensure_future(expiry, "body.expires_at")?;
        }

        let expires_at =
            expires_at.unwrap_or_else(|| Utc::now() + Duration::days(DEFAULT_EXPIRY_DAYS));

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let new = NewShortUrl {
                id: generate_short_id()?,
                url: url.clone(),
                expires_at,
            };

            match self.repository.insert(new).await {
                Ok(mapping) => {
                    tracing::info!(id = %mapping.id, "created short URL");
                    return Ok(mapping);
                }
                // Truncated id collided with an existing row, roll again.
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short id",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Returns one page of mappings.
    ///
    /// `page` below 1 and `limit` below 5 are silently clamped up, never
    /// rejected. The offset is `(page - 1) * limit` over insertion order.
    pub async fn list(&self, page: i64, limit: i64) -> Result<ShortUrlPage, AppError> {
        let page = page.max(MIN_PAGE);
        let limit = limit.max(MIN_LIMIT);
        let offset = (page - 1) * limit;

        let data = self.repository.list(offset, limit).await?;

        Ok(ShortUrlPage { data, page, limit })
    }

    /// Records a visit and returns the destination URL.
    ///
    /// The increment is atomic in the store and leaves `updated_at`
    /// untouched — a visit is not an update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn redirect(&self, id: &str) -> Result<String, AppError> {
        match self.repository.increment_visitors(id).await? {
            Some(mapping) => Ok(mapping.url),
            None => Err(Self::not_found(id)),
        }
    }

    /// Returns the full mapping for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn details(&self, id: &str) -> Result<ShortUrl, AppError> {
        self.require(id).await
    }

    /// Applies a partial update to a mapping.
    ///
    /// A new `url` is shape-validated and resets `visitors` to 0; a new
    /// `expires_at` must be strictly in the future and replaces the stored
    /// value. Either field may be absent. `updated_at` is always refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent, or
    /// [`AppError::Validation`] on a bad URL or past expiry.
    pub async fn update(&self, id: &str, patch: ShortUrlPatch) -> Result<ShortUrl, AppError> {
        let mut mapping = self.require(id).await?;

        if let Some(url) = patch.url {
            if !is_valid_url(&url) {
                return Err(AppError::validation(
                    "body.url",
                    "url is not valid",
                    "value_error",
                ));
            }
            mapping.url = url;
            mapping.visitors = 0;
        }

        if let Some(expires_at) = patch.expires_at {
            Self::ensure_future(expires_at, "body.expires_at")?;
            mapping.expires_at = Some(expires_at);
        }

        mapping.updated_at = Utc::now();

        self.repository.update(&mapping).await
    }

    /// Replaces the expiry of a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `expires_at` is not strictly in
    /// the future, or [`AppError::NotFound`] if the id is absent.
    pub async fn update_expiration(
        &self,
        id: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<ShortUrl, AppError> {
        if expires_at <= Utc::now() {
            return Err(AppError::bad_request(
                "Expire date is in the past",
                json!({ "expire_date": expires_at.to_rfc3339() }),
            ));
        }

        let mut mapping = self.require(id).await?;
        mapping.expires_at = Some(expires_at);
        mapping.updated_at = Utc::now();

        self.repository.update(&mapping).await
    }

    /// Deletes a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(Self::not_found(id));
        }

        tracing::info!(%id, "deleted short URL");
        Ok(())
    }

    /// Constructs the absolute short link for an id.
    pub fn short_link(&self, base_url: &str, id: &str) -> String {
        format!("{}/v1/{}", base_url.trim_end_matches('/'), id)
    }

    async fn require(&self, id: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    fn ensure_future(expires_at: DateTime<Utc>, loc: &str) -> Result<(), AppError> {
        if expires_at <= Utc::now() {
            return Err(AppError::validation(
                loc,
                "expires_at must be a future date",
                "value_error",
            ));
        }
        Ok(())
    }

    fn not_found(id: &str) -> AppError {
        AppError::not_found("ShortURL not found", json!({ "id": id }))
    }
}
