//! Outgoing email messages and their delivery.

use async_trait::async_trait;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Rendered email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient email address
    pub to: String,
    /// Sender address
    pub from: String,
    /// Email subject line
    pub subject: String,
    /// Plain text body
    pub body: String,
}

impl EmailMessage {
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Mail transport used by the worker.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> AppResult<()>;
}

/// Mailer that writes each message to the log instead of an SMTP relay.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: EmailMessage) -> AppResult<()> {
        tracing::info!(
            "=== EMAIL ===\n\
             From: {}\n\
             To: {}\n\
             Subject: {}\n\
             Body:\n{}\n\
             =============",
            message.from,
            message.to,
            message.subject,
            message.body
        );
        Ok(())
    }
}
