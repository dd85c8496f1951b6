#![allow(dead_code)]

use axum_extra::extract::cookie::Key;
use linksnip::application::services::ShortenService;
use linksnip::infrastructure::persistence::SqliteUrlRepository;
use linksnip::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let shorten_service = Arc::new(ShortenService::new(repository));

    AppState::new(
        shorten_service,
        "http://short.test".to_string(),
        Key::derive_from(b"test-secret-key-0123456789abcdef"),
    )
}

pub async fn create_test_url(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, original_url, clicks, created_at) VALUES (?, ?, 0, ?)")
        .bind(code)
        .bind(url)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn url_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn clicks_for(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
