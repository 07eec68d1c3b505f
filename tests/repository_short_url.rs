mod common;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use shorturl::domain::entities::NewShortUrl;
use shorturl::domain::repositories::ShortUrlRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgShortUrlRepository;

fn new_short_url(id: &str, url: &str) -> NewShortUrl {
    NewShortUrl {
        id: id.to_string(),
        url: url.to_string(),
        expires_at: Utc::now() + Duration::days(90),
    }
}

#[sqlx::test]
async fn test_insert(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let result = repo.insert(new_short_url("LTMGmJ3", "https://example.com")).await;

    assert!(result.is_ok());
    let mapping = result.unwrap();
    assert_eq!(mapping.id, "LTMGmJ3");
    assert_eq!(mapping.url, "https://example.com");
    assert_eq!(mapping.visitors, 0);
    assert!(mapping.expires_at.is_some());
    assert!(mapping.updated_at >= mapping.created_at);
}

#[sqlx::test]
async fn test_insert_duplicate_id_is_conflict(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    repo.insert(new_short_url("LTMGmJ3", "https://example.com"))
        .await
        .unwrap();

    let result = repo.insert(new_short_url("LTMGmJ3", "https://other.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    common::insert_short_url(&pool, "LTMGmJ3", "https://example.com").await;
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let result = repo.find_by_id("LTMGmJ3").await.unwrap();

    assert!(result.is_some());
    assert_eq!(result.unwrap().url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let result = repo.find_by_id("missing1").await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_list_respects_insertion_order_and_offset(pool: PgPool) {
    let base = Utc::now() - Duration::hours(3);
    common::insert_short_url_created_at(&pool, "first00", "https://a.com", base).await;
    common::insert_short_url_created_at(&pool, "second0", "https://b.com", base + Duration::hours(1))
        .await;
    common::insert_short_url_created_at(&pool, "third00", "https://c.com", base + Duration::hours(2))
        .await;

    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let first_page = repo.list(0, 2).await.unwrap();
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].id, "first00");
    assert_eq!(first_page[1].id, "second0");

    let second_page = repo.list(2, 2).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, "third00");
}

#[sqlx::test]
async fn test_update_replaces_mutable_columns(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let mut mapping = repo
        .insert(new_short_url("LTMGmJ3", "https://old.com"))
        .await
        .unwrap();

    mapping.url = "https://new.com".to_string();
    mapping.visitors = 0;
    mapping.updated_at = Utc::now();
    mapping.expires_at = Some(Utc::now() + Duration::days(30));

    let updated = repo.update(&mapping).await.unwrap();

    assert_eq!(updated.url, "https://new.com");
    assert_eq!(updated.created_at, mapping.created_at);
}

#[sqlx::test]
async fn test_update_missing_id_is_not_found(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let mapping = repo
        .insert(new_short_url("LTMGmJ3", "https://example.com"))
        .await
        .unwrap();
    repo.delete("LTMGmJ3").await.unwrap();

    let result = repo.update(&mapping).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    common::insert_short_url(&pool, "LTMGmJ3", "https://example.com").await;
    let repo = PgShortUrlRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete("LTMGmJ3").await.unwrap());
    assert_eq!(common::row_count(&pool).await, 0);

    // second delete finds nothing
    assert!(!repo.delete("LTMGmJ3").await.unwrap());
}

#[sqlx::test]
async fn test_increment_visitors(pool: PgPool) {
    common::insert_short_url(&pool, "LTMGmJ3", "https://example.com").await;
    let before = common::fetch_updated_at(&pool, "LTMGmJ3").await;

    let repo = PgShortUrlRepository::new(Arc::new(pool.clone()));

    let first = repo.increment_visitors("LTMGmJ3").await.unwrap().unwrap();
    assert_eq!(first.visitors, 1);

    let second = repo.increment_visitors("LTMGmJ3").await.unwrap().unwrap();
    assert_eq!(second.visitors, 2);

    assert_eq!(common::fetch_updated_at(&pool, "LTMGmJ3").await, before);
}

#[sqlx::test]
async fn test_increment_visitors_missing_id(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let result = repo.increment_visitors("missing1").await.unwrap();

    assert!(result.is_none());
}
