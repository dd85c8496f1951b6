//! Form-based shorten handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::{self, FlashMessage};

/// Fields of the submission form.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: String,
    #[serde(default)]
    pub custom: Option<String>,
}

/// Template for the result page showing the created short link.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub short_url: String,
    pub long_url: String,
}

/// Handles the submission form.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// On success renders the result page. On a validation failure the user
/// never loses their place: a flash message is queued and the response
/// redirects back to the form. Storage failures fall through to the
/// generic error response.
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    match state
        .shorten_service
        .create_short_link(&form.url, form.custom.as_deref())
        .await
    {
        Ok(record) => Ok(ResultTemplate {
            short_url: state.short_url(&record.short_code),
            long_url: record.original_url,
        }
        .into_response()),
        Err(AppError::InvalidUrl) => Ok(flash_redirect(
            jar,
            FlashMessage::danger("Please enter a valid URL."),
        )),
        Err(AppError::InvalidAlias) => Ok(flash_redirect(
            jar,
            FlashMessage::warning("Custom alias may contain letters, digits, '-' and '_' only."),
        )),
        Err(AppError::AliasTaken) => Ok(flash_redirect(
            jar,
            FlashMessage::warning("That custom alias is taken. Try another."),
        )),
        Err(other) => Err(other),
    }
}

fn flash_redirect(jar: SignedCookieJar, message: FlashMessage) -> Response {
    (flash::set_flash(jar, &message), Redirect::to("/")).into_response()
}
