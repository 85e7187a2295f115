//! Read-only settings store abstraction
//!
//! The dispatcher never reads configuration directly; it is handed a typed
//! [`crate::config::MailerConfig`] parsed from a [`SettingsStore`]. Stores
//! only need to answer string lookups by key.

use std::collections::HashMap;
use std::env;

/// Setting keys understood by the configuration parser.
pub mod keys {
    pub const REGION: &str = "region";
    pub const DEFAULT_SENDER_NAME: &str = "default_sender_name";
    pub const DEFAULT_SENDER_EMAIL: &str = "default_sender_email";
    pub const ENABLE_EMAILS: &str = "enable_emails";
    pub const AWS_ACCESS_KEY_ID: &str = "aws_access_key_id";
    pub const AWS_SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
    pub const TEST_MODE: &str = "test_mode";
    pub const TEST_MODE_RECIPIENT_NAME: &str = "test_mode_recipient_name";
    pub const TEST_MODE_RECIPIENT_EMAIL: &str = "test_mode_recipient_email";
}

/// Read-only key/value settings source
pub trait SettingsStore: Send + Sync {
    /// Look up a setting value by key
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory settings store backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Settings store backed by `MAILROOM_*` environment variables
///
/// The key `default_sender_email` maps to `MAILROOM_DEFAULT_SENDER_EMAIL`,
/// and so on for the other keys.
#[derive(Debug, Clone, Default)]
pub struct EnvStore;

impl EnvStore {
    pub fn new() -> Self {
        Self
    }

    fn var_name(key: &str) -> String {
        format!("MAILROOM_{}", key.to_ascii_uppercase())
    }
}

impl SettingsStore for EnvStore {
    fn get(&self, key: &str) -> Option<String> {
        env::var(Self::var_name(key)).ok()
    }
}
