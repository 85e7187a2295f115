//! Mail request and dispatch outcome types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Email address with optional display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailAddress {
    pub email: String,
    pub name: Option<String>,
}

impl MailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Body parts of an outgoing message
///
/// At least one part should be present for a send to be meaningful; an
/// empty body is passed through to the transport as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailBody {
    pub html: Option<String>,
    pub text: Option<String>,
}

impl MailBody {
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            html: Some(body.into()),
            text: None,
        }
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self {
            html: None,
            text: Some(body.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_none() && self.text.is_none()
    }
}

/// Reference to a named template plus its substitution variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRef {
    pub name: String,
    pub variables: HashMap<String, String>,
}

impl TemplateRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: HashMap::new(),
        }
    }

    /// Add a substitution variable
    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }
}

/// A single outgoing mail request
///
/// Built by the caller, consumed once by the dispatcher, then discarded.
/// A missing `from` falls back to the configured default sender.
#[derive(Debug, Clone)]
pub struct MailRequest {
    pub to: Vec<MailAddress>,
    pub subject: String,
    pub body: MailBody,
    pub from: Option<MailAddress>,
    pub template: Option<TemplateRef>,
}

impl MailRequest {
    pub fn new(to: Vec<MailAddress>, subject: impl Into<String>) -> Self {
        Self {
            to,
            subject: subject.into(),
            body: MailBody::default(),
            from: None,
            template: None,
        }
    }

    pub fn html_body(mut self, body: impl Into<String>) -> Self {
        self.body.html = Some(body.into());
        self
    }

    pub fn text_body(mut self, body: impl Into<String>) -> Self {
        self.body.text = Some(body.into());
        self
    }

    pub fn from(mut self, sender: MailAddress) -> Self {
        self.from = Some(sender);
        self
    }

    pub fn template(mut self, template: TemplateRef) -> Self {
        self.template = Some(template);
        self
    }
}

/// Failure categories for a dispatch attempt
///
/// A closed set: `Disabled` is the policy short-circuit, `Validation`
/// covers malformed input caught before the transport call, `Transport`
/// covers everything the provider rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Disabled,
    Validation,
    Transport,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Disabled => "disabled",
            Self::Validation => "validation-error",
            Self::Transport => "transport-error",
        };
        f.write_str(label)
    }
}

/// Outcome of a dispatch attempt
///
/// Every call to [`crate::MailDispatcher::send`] returns one of these;
/// nothing propagates to the caller as a panic or error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Sent {
        /// Provider-assigned message identifier, when the provider gave one
        message_id: Option<String>,
    },
    Failed {
        kind: FailureKind,
        detail: String,
    },
}

impl DispatchResult {
    pub fn sent(message_id: Option<String>) -> Self {
        Self::Sent { message_id }
    }

    pub fn failed(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self::Failed {
            kind,
            detail: detail.into(),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}
