use std::time::Duration;

use async_trait::async_trait;
use common::ContactNotification;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, instrument};

use super::{MailError, Mailer};
use crate::config::{SmtpConfig, SmtpTls};

/// [`Mailer`] backed by a lettre SMTP transport.
///
/// A fresh transport is built for every send and dropped when the call
/// returns, so the SMTP session never outlives one notification, whether the
/// send succeeded or not. Connections are never pooled.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let cfg = &self.config;
        let builder = match cfg.tls {
            SmtpTls::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.host)?,
            SmtpTls::Starttls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host)?,
            SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&cfg.host),
        };

        let mut builder = builder.port(cfg.port);
        if !cfg.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                cfg.username.clone(),
                cfg.password.clone(),
            ));
        }
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Some(Duration::from_secs(secs)));
        }

        Ok(builder.build())
    }
}

fn build_message(notification: &ContactNotification) -> Result<Message, MailError> {
    let from: Mailbox = notification.from.parse()?;
    let to: Mailbox = notification.to.parse()?;

    Ok(Message::builder()
        .from(from)
        .to(to)
        .subject(notification.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(notification.body.clone())?)
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[instrument(skip_all, fields(host = %self.config.host, port = self.config.port))]
    async fn send(&self, notification: &ContactNotification) -> Result<(), MailError> {
        let message = build_message(notification)?;
        let transport = self.transport()?;

        debug!("Connecting to SMTP server");
        transport.send(message).await?;
        debug!("SMTP server accepted the message");

        Ok(())
    }
}
