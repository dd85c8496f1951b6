//! Handler for the JSON shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "custom": "my-link" }
/// ```
///
/// `custom` is optional.
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "code": "abc123",
///   "short_url": "https://sho.rt/abc123",
///   "original_url": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// - 400 `{"error":"invalid_url"}` - empty URL, host failing the dot
///   heuristic, or a body that is not valid JSON
/// - 400 `{"error":"invalid_custom"}` - alias with characters outside alphanumeric, `-`, `_`
/// - 409 `{"error":"custom_taken"}` - alias already exists or is reserved
pub async fn shorten_handler(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ShortenRequest>, AppError>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let record = state
        .shorten_service
        .create_short_link(&payload.url, payload.custom.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: state.short_url(&record.short_code),
            code: record.short_code,
            original_url: record.original_url,
        }),
    ))
}
