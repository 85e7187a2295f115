//! Mailroom - transactional email dispatch over Amazon SES
//!
//! This crate provides a small, configuration-driven mail dispatcher:
//! callers hand it a [`MailRequest`] and get back a [`DispatchResult`],
//! with sending policy (enabled flag, test-mode redirection), input
//! normalization, and optional template rendering applied in between.

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod sanitize;
pub mod settings;
pub mod template;
pub mod transport;

// Re-export commonly used types
pub use config::{MailerConfig, TestMode};
pub use dispatch::MailDispatcher;
pub use domain::{DispatchResult, FailureKind, MailAddress, MailRequest};
