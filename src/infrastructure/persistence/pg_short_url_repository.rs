//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Database row for the `short_urls` table.
///
/// Kept separate from the domain entity so the domain layer stays free of
/// SQLx derives.
#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: String,
    url: String,
    visitors: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        Self {
            id: row.id,
            url: row.url,
            visitors: row.visitors,
            created_at: row.created_at,
            updated_at: row.updated_at,
            expires_at: row.expires_at,
        }
    }
}

const COLUMNS: &str = "id, url, visitors, created_at, updated_at, expires_at";

/// PostgreSQL repository for short URL storage and retrieval.
///
/// `created_at` and `updated_at` come from the database `now()` defaults on
/// insert; the visit increment is a single `UPDATE` statement so concurrent
/// redirects serialize on the row instead of losing counts.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn insert(&self, new: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "INSERT INTO short_urls (id, url, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        ))
        .bind(&new.id)
        .bind(&new.url)
        .bind(new.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "SELECT {COLUMNS} FROM short_urls WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "SELECT {COLUMNS} FROM short_urls
             ORDER BY created_at
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, mapping: &ShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "UPDATE short_urls
             SET url = $2, visitors = $3, updated_at = $4, expires_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(&mapping.id)
        .bind(&mapping.url)
        .bind(mapping.visitors)
        .bind(mapping.updated_at)
        .bind(mapping.expires_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into).ok_or_else(|| {
            AppError::not_found("ShortURL not found", json!({ "id": mapping.id }))
        })
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_visitors(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "UPDATE short_urls
             SET visitors = visitors + 1
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
