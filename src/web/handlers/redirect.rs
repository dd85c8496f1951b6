//! Short link redirect-follow handler.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found::not_found_page;

/// Follows a short code.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Increments the click counter and answers with a 302 Found redirect to
/// the stored URL. An unknown code renders the HTML 404 page without
/// mutating anything.
pub async fn follow_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    match state.shorten_service.follow(&code).await {
        Ok(record) => Ok((
            StatusCode::FOUND,
            [(header::LOCATION, location_value(&record.original_url))],
        )
            .into_response()),
        Err(AppError::NotFound { .. }) => Ok(not_found_page()),
        Err(other) => Err(other),
    }
}

/// Builds a `Location` value from a stored URL.
///
/// Header values must be ASCII, but validation accepts IRIs such as
/// `http://exämple.com/päge`. Those are re-serialized through the `url`
/// crate (punycode host, percent-encoded path); ASCII URLs pass through
/// byte for byte.
fn location_value(original_url: &str) -> String {
    if original_url.is_ascii() {
        return original_url.to_string();
    }

    Url::parse(original_url)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| original_url.to_string())
}
