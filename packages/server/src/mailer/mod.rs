//! Outbound email capability used by the contact handler.
//!
//! The handler only depends on the [`Mailer`] trait so tests can swap the
//! SMTP backend for an in-memory one.

mod smtp;

use async_trait::async_trait;
use common::ContactNotification;
use thiserror::Error;

pub use smtp::SmtpMailer;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Invalid message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailError::Transport(err.to_string())
    }
}

/// Sends one notification per call. Implementations make a single attempt
/// and must not retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, notification: &ContactNotification) -> Result<(), MailError>;
}
