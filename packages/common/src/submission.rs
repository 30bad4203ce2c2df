use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A visitor's message from the portfolio contact form.
///
/// Lives for a single request: it is never stored and never mutated once
/// deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ContactSubmission {
    /// Visitor's name. Must not be blank.
    #[schema(example = "Ada")]
    pub name: String,
    /// Visitor's reply address. Not checked for deliverability; it is only
    /// quoted in the notification body.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Free-form message text.
    #[schema(example = "Hello")]
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Semantic checks that the JSON schema alone cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}
