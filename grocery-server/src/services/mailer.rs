//! Verification mail transport
//!
//! Delivery is fire-and-forget: [`dispatch_verification_code`] spawns the send
//! and only logs failures, so a slow or broken transport never fails a request.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;

const VERIFICATION_SUBJECT: &str = "Your verification code";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail rejected: {0}")]
    Rejected(String),
}

/// Outbound mail transport
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), MailError>;
}

fn verification_body(code: &str) -> String {
    format!("Your verification code is: {code}\nEnter it in the app to activate your account.")
}

/// Spawn delivery of a verification code
pub fn dispatch_verification_code(mailer: Arc<dyn Mailer>, to: String, code: String) {
    tokio::spawn(async move {
        if let Err(e) = mailer.send_verification_code(&to, &code).await {
            tracing::warn!(to = %to, error = %e, "Failed to deliver verification code");
        }
    });
}

/// Writes the mail to the log instead of sending it
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), MailError> {
        tracing::info!(from = %self.from, to = %to, "Verification code issued (log transport)");
        tracing::debug!(to = %to, code = %code, "Verification code");
        Ok(())
    }
}

#[derive(Serialize)]
struct WebhookMail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

/// POSTs each mail as JSON to a relay endpoint
#[derive(Debug, Clone)]
pub struct WebhookMailer {
    client: reqwest::Client,
    url: String,
    from: String,
}

impl WebhookMailer {
    pub fn new(url: impl Into<String>, from: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
            from: from.into(),
        })
    }
}

#[async_trait]
impl Mailer for WebhookMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), MailError> {
        let mail = WebhookMail {
            from: &self.from,
            to,
            subject: VERIFICATION_SUBJECT,
            text: verification_body(code),
        };
        let response = self.client.post(&self.url).json(&mail).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MailError::Rejected(format!("relay answered {status}")));
        }
        tracing::info!(to = %to, "Verification code sent");
        Ok(())
    }
}

/// A mail captured by [`RecordingMailer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub to: String,
    pub code: String,
}

/// Keeps every mail in memory; used by tests to read issued codes
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<SentMail>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().clone()
    }

    /// Most recent code sent to `email`
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .iter()
            .rev()
            .find(|m| m.to == email)
            .map(|m| m.code.clone())
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), MailError> {
        self.sent.lock().push(SentMail {
            to: to.to_string(),
            code: code.to_string(),
        });
        Ok(())
    }
}
