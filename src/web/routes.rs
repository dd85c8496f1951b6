//! HTML route configuration.

use crate::state::AppState;
use crate::web::handlers::{follow_handler, index_handler, info_handler, shorten_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Browser-facing routes.
///
/// # Endpoints
///
/// - `GET  /`            - Submission form
/// - `POST /shorten`     - Form-based shorten
/// - `GET  /info/{code}` - Link metadata page
/// - `GET  /{code}`      - Redirect-follow (most specific routes win, so
///   `/shorten` and `/info/...` are never shadowed)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_form_handler))
        .route("/info/{code}", get(info_handler))
        .route("/{code}", get(follow_handler))
}
