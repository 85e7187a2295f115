//! Email transport abstraction
//!
//! A transport receives a fully normalized [`OutboundEmail`] and performs
//! one blocking (awaited) delivery attempt. Retries, timeouts, and
//! scheduling are the caller's business.

pub mod ses;

pub use ses::SesTransport;

use async_trait::async_trait;
use thiserror::Error;

/// Transport-level error types
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),
}

/// Fully normalized message handed to a transport
///
/// Addresses are already formatted as `"Name <email>"` and body parts are
/// concrete strings (empty when the caller supplied nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    pub source: String,
}

/// Provider receipt for an accepted message
#[derive(Debug, Clone)]
pub struct SendReceipt {
    /// Provider-assigned message identifier, when one was returned
    pub message_id: Option<String>,
}

/// Trait for email transports
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Perform a single delivery attempt
    async fn send_email(&self, email: &OutboundEmail) -> Result<SendReceipt, TransportError>;

    /// Get the transport name
    fn transport_name(&self) -> &'static str;
}
