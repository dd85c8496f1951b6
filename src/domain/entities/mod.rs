//! Core domain entities representing the business data model.
//!
//! The service persists a single entity: the mapping from a short code to
//! its original URL, together with a click counter and creation timestamp.

pub mod url_record;

pub use url_record::{NewUrl, UrlRecord};
