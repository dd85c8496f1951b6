//! Link metadata page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use chrono::SecondsFormat;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found::not_found_page;

/// Template for the link metadata page.
#[derive(Template, WebTemplate)]
#[template(path = "info.html")]
pub struct InfoTemplate {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: String,
    pub short_url: String,
}

/// Renders metadata for a short code.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// Does not touch the click counter. Unknown codes render the HTML 404 page.
pub async fn info_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    match state.shorten_service.get_info(&code).await {
        Ok(record) => Ok(InfoTemplate {
            short_url: state.short_url(&record.short_code),
            code: record.short_code,
            original_url: record.original_url,
            clicks: record.clicks,
            created_at: record.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
        .into_response()),
        Err(AppError::NotFound { .. }) => Ok(not_found_page()),
        Err(other) => Err(other),
    }
}
