//! HTTP request handlers for the JSON API.

pub mod shorten;

pub use shorten::shorten_handler;
