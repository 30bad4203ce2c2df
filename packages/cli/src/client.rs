use std::time::Duration;

use anyhow::Context;
use common::response::EMAIL_SENT;
use common::{ContactSubmission, ErrorBody};
use serde_json::Value;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/v1/send-email";

/// What the visitor is told after submitting.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Sent {
        message: String,
    },
    Failed {
        status: u16,
        error: String,
        details: Option<String>,
    },
}

impl Outcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent { .. })
    }
}

/// POST the submission once and interpret the answer. No retry.
pub fn submit(
    endpoint: &str,
    submission: &ContactSubmission,
    timeout: Duration,
) -> anyhow::Result<Outcome> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let res = client
        .post(endpoint)
        .json(submission)
        .send()
        .with_context(|| format!("Failed to reach {endpoint}"))?;

    let status = res.status().as_u16();
    let body = res.text().context("Failed to read response body")?;
    Ok(interpret(status, &body))
}

/// The `success` flag decides; the status code only matters when the body is
/// not JSON (e.g. a proxy error page).
pub fn interpret(status: u16, body: &str) -> Outcome {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return if (200..300).contains(&status) {
            Outcome::Sent {
                message: EMAIL_SENT.to_string(),
            }
        } else {
            Outcome::Failed {
                status,
                error: format!("HTTP {status}"),
                details: (!body.trim().is_empty()).then(|| body.trim().to_string()),
            }
        };
    };

    if value.get("success").and_then(Value::as_bool) == Some(true) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(EMAIL_SENT)
            .to_string();
        return Outcome::Sent { message };
    }

    match serde_json::from_value::<ErrorBody>(value) {
        Ok(err) => Outcome::Failed {
            status,
            error: err.error,
            details: err.details,
        },
        Err(_) => Outcome::Failed {
            status,
            error: "Unexpected response".to_string(),
            details: Some(body.to_string()),
        },
    }
}
