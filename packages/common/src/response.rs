use serde::{Deserialize, Serialize};

pub const EMAIL_SENT: &str = "Email sent successfully";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const FAILED_TO_SEND: &str = "Failed to send email";

/// Body of a successful `POST /api/v1/send-email`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SendEmailResponse {
    /// Always `true`.
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Email sent successfully")]
    pub message: String,
}

impl SendEmailResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: EMAIL_SENT.into(),
        }
    }
}

/// Body of every failed request.
///
/// `success` and `details` are omitted for a rejected method, which answers
/// with `{"error":"Method not allowed"}` only.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = false)]
    pub success: Option<bool>,
    /// Generic, stable error description.
    #[schema(example = "Failed to send email")]
    pub error: String,
    /// Best-effort description of the underlying failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Connection error: Connection refused (os error 111)")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn method_not_allowed() -> Self {
        Self {
            success: None,
            error: METHOD_NOT_ALLOWED.into(),
            details: None,
        }
    }

    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            error: INVALID_REQUEST_BODY.into(),
            details: Some(details.into()),
        }
    }

    pub fn send_failed(details: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            error: FAILED_TO_SEND.into(),
            details: Some(details.into()),
        }
    }
}
