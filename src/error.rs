use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Application error taxonomy.
///
/// Every variant maps to a machine-readable code rendered as
/// `{"error": "<code>"}` with the matching HTTP status. Web handlers
/// intercept the validation variants before this rendering kicks in and
/// translate them into flash messages or the HTML 404 page instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is empty or its host fails the dot heuristic.
    #[error("invalid URL")]
    InvalidUrl,

    /// The custom alias contains characters outside alphanumeric, `-`, `_`.
    #[error("invalid custom alias")]
    InvalidAlias,

    /// The requested custom alias (or, under a race, a generated code)
    /// already exists in the store.
    #[error("custom alias already taken")]
    AliasTaken,

    /// No record exists for the requested short code.
    #[error("unknown short code: {code}")]
    NotFound { code: String },

    /// Storage or other unexpected failure; the message is logged, never
    /// sent to the client.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Machine-readable error code used in JSON bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidUrl => "invalid_url",
            AppError::InvalidAlias => "invalid_custom",
            AppError::AliasTaken => "custom_taken",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidAlias => StatusCode::BAD_REQUEST,
            AppError::AliasTaken => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message } = &self {
            tracing::error!(%message, "request failed");
        }

        let body = ErrorBody {
            error: self.error_code(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Maps storage errors into the application taxonomy.
///
/// A unique-constraint violation on insert means the short code lost a race
/// against a concurrent insert of the same code, so it surfaces as
/// [`AppError::AliasTaken`]. Everything else is internal.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::AliasTaken;
        }
    }

    AppError::internal(e.to_string())
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// A request body that cannot be parsed as JSON carries no URL at all, so
/// it gets the same answer as an empty URL.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(_: axum::extract::rejection::JsonRejection) -> Self {
        AppError::InvalidUrl
    }
}
