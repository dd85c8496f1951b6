//! Flash messages carried across a redirect in a signed cookie.
//!
//! A failed form submission queues one message and redirects back to the
//! form; the next render of the index page consumes it. The cookie is
//! signed with the key derived from `SECRET_KEY`.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::Cookie;
use serde::{Deserialize, Serialize};

const FLASH_COOKIE: &str = "flash";

/// A one-shot message displayed on the next render of the index page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Display category, mapped to a CSS class (`danger`, `warning`).
    pub category: String,
    pub text: String,
}

impl FlashMessage {
    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            category: "danger".to_string(),
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            category: "warning".to_string(),
            text: text.into(),
        }
    }
}

/// Queues a flash message, replacing any message already pending.
pub fn set_flash(jar: SignedCookieJar, message: &FlashMessage) -> SignedCookieJar {
    let value = serde_json::to_string(message).unwrap_or_default();
    let cookie = Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .build();

    jar.add(cookie)
}

/// Takes pending flash messages, clearing the cookie.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Vec<FlashMessage>) {
    let messages = jar
        .get(FLASH_COOKIE)
        .and_then(|cookie| serde_json::from_str::<FlashMessage>(cookie.value()).ok())
        .map(|message| vec![message])
        .unwrap_or_default();

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());

    (jar, messages)
}
