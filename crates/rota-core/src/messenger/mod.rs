//! Outbound text messaging.
//!
//! [`Messenger`] is the seam between the notifier and the SMS provider.
//! [`TwilioClient`] is the production implementation.

use async_trait::async_trait;
use thiserror::Error;

pub mod twilio;

pub use twilio::TwilioClient;

/// Error returned by a messaging provider for a single send attempt.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced a usable response
    #[error("Request to messaging provider failed: {message}")]
    Request {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The provider rejected the message
    #[error("Messaging provider returned {status}: {message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },
}

/// Acknowledgement of an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReceipt {
    /// Provider-assigned message identifier
    pub sid: String,

    /// Provider delivery status at acceptance time (e.g. `queued`)
    pub status: Option<String>,
}

/// Sends a single text message.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, from: &str, to: &str, body: &str)
        -> Result<MessageReceipt, ProviderError>;
}
