//! Shared application state injected into all handlers.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

use crate::application::services::ShortenService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// State shared across requests.
///
/// Constructed once at startup from [`crate::config::Config`]; no ambient
/// globals are used anywhere.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteUrlRepository>>,
    /// Public base used to build short links, without trailing slash handling
    /// applied (see [`AppState::short_url`]).
    pub base_url: String,
    /// Signing key for the flash-message cookie.
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(
        shorten_service: Arc<ShortenService<SqliteUrlRepository>>,
        base_url: String,
        cookie_key: Key,
    ) -> Self {
        Self {
            shorten_service,
            base_url,
            cookie_key,
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}
