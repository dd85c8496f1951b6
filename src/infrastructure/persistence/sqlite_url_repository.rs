//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// SQLite repository for URL record storage and retrieval.
///
/// Owns a connection pool; every operation acquires a connection from it
/// and releases it on all exit paths. Code uniqueness is enforced by the
/// UNIQUE constraint on `short_code`.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let row: Option<i64> = sqlx::query_scalar("SELECT 1 FROM urls WHERE short_code = ?")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.is_some())
    }

    async fn insert(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let created_at = Utc::now();

        sqlx::query(
            "INSERT INTO urls (short_code, original_url, clicks, created_at) VALUES (?, ?, 0, ?)",
        )
        .bind(&new_url.short_code)
        .bind(&new_url.original_url)
        .bind(created_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(UrlRecord {
            short_code: new_url.short_code,
            original_url: new_url.original_url,
            clicks: 0,
            created_at,
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            "SELECT short_code, original_url, clicks, created_at FROM urls WHERE short_code = ?",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        // Single atomic UPDATE; zero affected rows means the code is
        // unknown, which the contract treats as a no-op.
        sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE short_code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
