//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten; normalized before validation. A missing
    /// field defaults to the empty string, which validation then rejects.
    #[serde(default)]
    pub url: String,

    /// Optional custom short code. Empty or whitespace-only means "no
    /// custom alias requested".
    #[serde(default)]
    pub custom: Option<String>,
}

/// Response for a successfully created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
}
