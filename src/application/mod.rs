//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating repository calls and
//! validation, giving HTTP handlers a clean API.
//!
//! - [`services::shorten_service::ShortenService`] - Link creation, lookup, and click counting

pub mod services;
