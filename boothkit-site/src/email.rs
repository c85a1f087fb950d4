//! Contact form delivery
//!
//! Posts contact messages to `{base}/api/send-email`. The server owns
//! validation and the actual mail transport; this client only reports
//! whether the handoff was accepted.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Path of the send endpoint, appended to the configured base URL.
pub const SEND_EMAIL_ENDPOINT: &str = "/api/send-email";

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// A visitor's contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Why a contact message was not delivered.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// Request never produced an HTTP response (DNS, refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Server refused the message.
    #[error("send rejected: {0}")]
    Rejected(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the send-email API
///
/// # Panics
/// Construction panics if the HTTP client cannot be built (should not
/// happen with valid config).
#[derive(Debug, Clone)]
pub struct EmailClient {
    client: Client,
    base_url: String,
}

impl EmailClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the send endpoint.
    pub fn send_url(&self) -> String {
        format!("{}{}", self.base_url, SEND_EMAIL_ENDPOINT)
    }

    /// Deliver a contact message.
    ///
    /// A non-success response is reported as `Rejected`, carrying the
    /// server's `error` field when the body has one and the HTTP status
    /// otherwise.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), EmailError> {
        let response = self
            .client
            .post(self.send_url())
            .json(message)
            .send()
            .await
            .map_err(|e| EmailError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!(subject = %message.subject, "contact message sent");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("HTTP status {}", status.as_u16()));
        Err(EmailError::Rejected(detail))
    }
}
