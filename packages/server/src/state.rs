use std::sync::Arc;

use crate::config::AppConfig;
use crate::mailer::{Mailer, SmtpMailer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// State backed by the real SMTP transport described in `config.smtp`.
    pub fn new(config: AppConfig) -> Self {
        let mailer = Arc::new(SmtpMailer::new(config.smtp.clone()));
        Self {
            config: Arc::new(config),
            mailer,
        }
    }
}
