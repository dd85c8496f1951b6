//! Submission form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use axum_extra::extract::SignedCookieJar;

use crate::web::flash::{self, FlashMessage};

/// Template for the URL submission form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub messages: Vec<FlashMessage>,
}

/// Renders the submission form with any pending flash messages.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, messages) = flash::take_flash(jar);

    (jar, IndexTemplate { messages })
}
