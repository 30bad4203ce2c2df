use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{ErrorBody, ValidationError};

use crate::mailer::MailError;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Any method other than POST and OPTIONS.
    MethodNotAllowed,
    /// Request body is not a well-formed contact submission.
    InvalidInput(String),
    /// Composing, connecting or sending failed. Carries the failure description.
    SendFailed(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, ErrorBody::method_not_allowed())
            }
            AppError::InvalidInput(detail) => {
                tracing::warn!("Rejected contact submission: {}", detail);
                (StatusCode::BAD_REQUEST, ErrorBody::invalid_input(detail))
            }
            AppError::SendFailed(detail) => {
                tracing::error!("Failed to send contact email: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::send_failed(detail),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        AppError::SendFailed(err.to_string())
    }
}
