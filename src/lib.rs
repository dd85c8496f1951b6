//! # linksnip
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer** ([`domain`]) - The `UrlRecord` entity and the
//!   `UrlRepository` trait
//! - **Application Layer** ([`application`]) - `ShortenService`: validation,
//!   code generation, persistence orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repository over
//!   a SQLx pool
//! - **API Layer** ([`api`]) - JSON endpoint for programmatic shortening
//! - **Web Layer** ([`web`]) - HTML form, result/info pages, flash messages
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults create ./urls.db and listen on 0.0.0.0:3000
//! export DATABASE_URL="sqlite:urls.db"
//! export BASE_URL="https://sho.rt"
//! export SECRET_KEY="<at least 32 bytes>"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables once at
//! startup via [`config::Config`]. See the [`config`] module for the
//! available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenService;
    pub use crate::domain::entities::{NewUrl, UrlRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
