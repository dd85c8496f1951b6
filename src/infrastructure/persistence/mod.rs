//! SQLite repository implementation.
//!
//! Concrete implementation of the domain repository trait using SQLx with
//! a pooled connection. Schema is applied via `sqlx::migrate!` at startup.

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
