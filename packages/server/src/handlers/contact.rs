use axum::Json;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use common::{ContactNotification, ContactSubmission, ErrorBody, SendEmailResponse};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::extractors::json::AppJson;
use crate::state::AppState;

/// Forward a contact form submission to the site owner's inbox.
#[utoipa::path(
    post,
    path = "/api/v1/send-email",
    tag = "Contact",
    operation_id = "sendEmail",
    summary = "Send a contact form message",
    description = "Emails the submission to the configured account. One SMTP attempt is made; \
                   there is no retry. The visitor's address only appears in the message body.",
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Email sent", body = SendEmailResponse),
        (status = 400, description = "Body is not a valid submission", body = ErrorBody),
        (status = 500, description = "Composing or sending the email failed", body = ErrorBody),
    ),
)]
#[instrument(skip_all)]
pub async fn send_email(
    method: Method,
    State(state): State<AppState>,
    payload: Result<AppJson<ContactSubmission>, AppError>,
) -> Result<Json<SendEmailResponse>, AppError> {
    info!("Received request: {}", method);

    let AppJson(submission) = payload?;
    submission.validate()?;

    let smtp = &state.config.smtp;
    info!(
        username = %smtp.username,
        has_password = smtp.has_password(),
        "Sending contact notification"
    );

    let notification = ContactNotification::compose(&submission, &smtp.username);
    state.mailer.send(&notification).await?;

    info!("Email sent successfully");
    Ok(Json(SendEmailResponse::sent()))
}

/// Answer a CORS preflight. The headers themselves are added by the router.
pub async fn preflight() -> StatusCode {
    info!("Received request: OPTIONS");
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed(method: Method) -> AppError {
    info!("Received request: {}", method);
    AppError::MethodNotAllowed
}
