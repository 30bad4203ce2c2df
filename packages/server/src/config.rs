use std::fmt;
use std::path::PathBuf;

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Value of `Access-Control-Allow-Origin`. Default: "*".
    #[serde(default = "default_allow_origin")]
    pub allow_origin: String,
}

fn default_allow_origin() -> String {
    "*".into()
}

impl CorsConfig {
    pub fn origin_header(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.allow_origin)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: default_allow_origin(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Max level for the fmt subscriber (`trace`..`error`). Default: "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Built portfolio site to serve for every path outside the API.
    #[serde(default)]
    pub site_dir: Option<PathBuf>,
    #[serde(default)]
    pub cors: CorsConfig,
}

fn default_log_level() -> String {
    "info".into()
}

/// How the SMTP connection is secured.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmtpTls {
    /// TLS from the first byte (SMTPS, port 465).
    #[default]
    Wrapper,
    /// Plain connection upgraded with STARTTLS (port 587).
    Starttls,
    /// Unencrypted. Only for local relays and tests.
    None,
}

#[derive(Deserialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub tls: SmtpTls,
    /// Account identifier. Doubles as the notification sender and recipient.
    #[serde(default)]
    pub username: String,
    /// Application password for `username`.
    #[serde(default)]
    pub password: String,
    /// Transport timeout. Unset leaves the transport default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SmtpConfig {
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && self.has_password()
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .field("username", &self.username)
            .field("has_password", &self.has_password())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub smtp: SmtpConfig,
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000)?
        .set_default("server.log_level", "info")?
        .set_default("server.cors.allow_origin", "*")?
        .set_default("smtp.host", "smtp.gmail.com")?
        .set_default("smtp.port", 465)?
        .set_default("smtp.tls", "wrapper")
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = with_defaults()?
            // Load from config/config.toml
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., FOLIO__SMTP__USERNAME)
            .add_source(Environment::with_prefix("FOLIO").separator("__"))
            // Secret names used by existing deployments
            .set_override_option("smtp.username", std::env::var("GMAIL_USER").ok())?
            .set_override_option("smtp.password", std::env::var("GMAIL_APP_PASSWORD").ok())?
            .build()?;

        s.try_deserialize::<Self>()?.validate()
    }

    /// Defaults plus a single TOML document, without the environment.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?
            .validate()
    }

    /// Checks that deserialization alone cannot express.
    fn validate(self) -> Result<Self, ConfigError> {
        if self.server.cors.origin_header().is_err() {
            return Err(ConfigError::Message(format!(
                "server.cors.allow_origin is not a valid header value: {:?}",
                self.server.cors.allow_origin
            )));
        }
        Ok(self)
    }
}
