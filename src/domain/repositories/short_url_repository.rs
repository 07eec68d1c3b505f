//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short URL mappings.
///
/// Provides keyed CRUD, pagination, and an atomic visit increment. Every
/// operation touches exactly one row; no cross-record transactions are
/// required.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_short_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a mapping by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Lists mappings in insertion order.
    ///
    /// Each call is a fresh snapshot read; the slice is not restartable
    /// across calls.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<ShortUrl>, AppError>;

    /// Replaces the mutable columns of a mapping by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches `mapping.id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, mapping: &ShortUrl) -> Result<ShortUrl, AppError>;

    /// Deletes a mapping by id.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if the id was
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Atomically increments the visit counter and returns the updated
    /// mapping, or `None` if the id is absent.
    ///
    /// The increment is a single statement so concurrent redirects cannot
    /// lose visits. `updated_at` is deliberately left untouched: a visit is
    /// not an update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_visitors(&self, id: &str) -> Result<Option<ShortUrl>, AppError>;
}
