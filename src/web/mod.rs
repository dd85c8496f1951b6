//! Web layer for the browser-facing UI.
//!
//! Server-side rendering with Askama templates.
//!
//! - [`handlers`] - Template rendering handlers
//! - [`flash`] - One-shot messages across redirects (signed cookie)
//! - [`routes`] - HTML route configuration

pub mod flash;
pub mod handlers;
pub mod routes;
