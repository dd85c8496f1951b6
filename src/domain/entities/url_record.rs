//! Url record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short code to URL mapping.
///
/// Records are immutable after creation except for the click counter, which
/// only ever grows. There is no delete operation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlRecord {
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new record.
///
/// `clicks` and `created_at` are assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub short_code: String,
    pub original_url: String,
}
