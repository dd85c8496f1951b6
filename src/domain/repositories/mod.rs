//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; the concrete implementation
//! lives in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit testing the service layer.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
