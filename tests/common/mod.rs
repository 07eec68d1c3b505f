#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use shorturl::application::services::ShortUrlService;
use shorturl::infrastructure::persistence::PgShortUrlRepository;
use shorturl::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgShortUrlRepository::new(Arc::new(pool)));

    AppState {
        shorturl_service: Arc::new(ShortUrlService::new(repository)),
        base_url: TEST_BASE_URL.to_string(),
    }
}

pub async fn insert_short_url(pool: &PgPool, id: &str, url: &str) {
    sqlx::query("INSERT INTO short_urls (id, url) VALUES ($1, $2)")
        .bind(id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_short_url_with_visitors(pool: &PgPool, id: &str, url: &str, visitors: i64) {
    sqlx::query("INSERT INTO short_urls (id, url, visitors) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(url)
        .bind(visitors)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_short_url_created_at(
    pool: &PgPool,
    id: &str,
    url: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO short_urls (id, url, created_at, updated_at) VALUES ($1, $2, $3, $3)",
    )
    .bind(id)
    .bind(url)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn fetch_visitors(pool: &PgPool, id: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT visitors FROM short_urls WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_updated_at(pool: &PgPool, id: &str) -> DateTime<Utc> {
    sqlx::query_scalar::<_, DateTime<Utc>>("SELECT updated_at FROM short_urls WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_expires_at(pool: &PgPool, id: &str) -> Option<DateTime<Utc>> {
    sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
        "SELECT expires_at FROM short_urls WHERE id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn row_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
