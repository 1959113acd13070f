//! Mapping from failures to `{message, status, data}` responses.

use api_shared::response::{INPUT_NOT_CORRECT, REMINDER_NOT_FOUND};
use api_shared::{ApiResponse, FieldErrors, HttpStatus};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reminders_core::ReminderError;

/// Errors a REST handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Reminder(#[from] ReminderError),
    #[error("request fields failed validation: {0:?}")]
    Validation(FieldErrors),
    #[error("malformed request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> HttpStatus {
        match self {
            ApiError::Reminder(ReminderError::NotFound(_)) => HttpStatus::NotFound,
            ApiError::Validation(_) | ApiError::BadRequest(_) => HttpStatus::BadRequest,
        }
    }
}

/// Response-line status for a wrapper status.
pub(crate) fn status_code(status: HttpStatus) -> StatusCode {
    match status {
        HttpStatus::Ok => StatusCode::OK,
        HttpStatus::Created => StatusCode::CREATED,
        HttpStatus::BadRequest => StatusCode::BAD_REQUEST,
        HttpStatus::NotFound => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = status_code(status);
        match self {
            ApiError::Reminder(err) => (
                code,
                Json(ApiResponse::new(REMINDER_NOT_FOUND, status, err.to_string())),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                code,
                Json(ApiResponse::new(INPUT_NOT_CORRECT, status, errors)),
            )
                .into_response(),
            ApiError::BadRequest(reason) => (
                code,
                Json(ApiResponse::new(INPUT_NOT_CORRECT, status, reason)),
            )
                .into_response(),
        }
    }
}
