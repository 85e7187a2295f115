//! Mail dispatch policy and normalization
//!
//! [`MailDispatcher`] is the single entry point callers use to send mail:
//! it applies the enabled/test-mode policy, normalizes addresses and
//! subject, renders an optional template, and maps the transport outcome
//! into a [`DispatchResult`]. Every path returns a result; nothing
//! escapes as a panic or error type.

use crate::config::{MailerConfig, TestMode};
use crate::domain::{DispatchResult, FailureKind, MailAddress, MailRequest, TemplateRef};
use crate::sanitize;
use crate::template::{TemplateEngine, TemplateResolver};
use crate::transport::{EmailTransport, OutboundEmail};
use std::sync::Arc;

/// Subject marker prepended to every test-mode send
pub const TEST_SUBJECT_PREFIX: &str = "Test - ";

/// Configuration-driven mail dispatcher
pub struct MailDispatcher {
    config: MailerConfig,
    transport: Arc<dyn EmailTransport>,
    resolver: Option<Arc<dyn TemplateResolver>>,
}

impl MailDispatcher {
    pub fn new(config: MailerConfig, transport: Arc<dyn EmailTransport>) -> Self {
        Self {
            config,
            transport,
            resolver: None,
        }
    }

    /// Attach a template resolver
    pub fn with_resolver(mut self, resolver: Arc<dyn TemplateResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Send a mail request, consuming it
    ///
    /// A single delivery attempt is made; no retries, and no timeout
    /// beyond the transport's own defaults.
    pub async fn send(&self, request: MailRequest) -> DispatchResult {
        if !self.config.enabled {
            return DispatchResult::failed(FailureKind::Disabled, "email sending is disabled");
        }

        let outbound = match self.normalize(&request) {
            Ok(outbound) => outbound,
            Err(detail) => return DispatchResult::failed(FailureKind::Validation, detail),
        };

        match self.transport.send_email(&outbound).await {
            Ok(receipt) => {
                tracing::debug!(
                    transport = self.transport.transport_name(),
                    message_id = ?receipt.message_id,
                    "message accepted"
                );
                DispatchResult::sent(receipt.message_id)
            }
            Err(e) => {
                tracing::error!(error = %e, "transport rejected message");
                DispatchResult::failed(FailureKind::Transport, e.to_string())
            }
        }
    }

    /// Turn a request into a transport-ready message
    ///
    /// Returns the validation failure detail on malformed input.
    fn normalize(&self, request: &MailRequest) -> Result<OutboundEmail, String> {
        if request.to.is_empty() {
            return Err("no recipients specified".to_string());
        }

        let sender = request
            .from
            .as_ref()
            .or(self.config.default_sender.as_ref())
            .ok_or_else(|| "no sender given and no default sender configured".to_string())?;
        let source = mailbox(sender)?;

        let mut subject = sanitize::clean_text(&request.subject);

        let to = match &self.config.test_mode {
            TestMode::Redirect { recipient } => {
                // Full override: production recipients never receive mail
                // while test mode is on.
                tracing::debug!(recipient = %recipient.email, "test mode active, redirecting delivery");
                subject = format!("{}{}", TEST_SUBJECT_PREFIX, subject);
                vec![mailbox(recipient)?]
            }
            TestMode::Off => request
                .to
                .iter()
                .map(mailbox)
                .collect::<Result<Vec<_>, _>>()?,
        };

        let mut html_body = request.body.html.clone().unwrap_or_default();
        let text_body = request.body.text.clone().unwrap_or_default();

        if let Some(template) = &request.template {
            match self.render_template(template) {
                Some(rendered) => html_body = rendered,
                // Resolution failure never fails the send; the html part
                // stays whatever was set before this step.
                None => tracing::warn!(template = %template.name, "template not resolved, keeping supplied html body"),
            }
        }

        Ok(OutboundEmail {
            to,
            subject,
            html_body,
            text_body,
            source,
        })
    }

    fn render_template(&self, template: &TemplateRef) -> Option<String> {
        let resolver = self.resolver.as_ref()?;
        let source = resolver.resolve(&template.name)?;

        let mut engine = TemplateEngine::new();
        engine.set_all(template.variables.iter());
        Some(engine.render(&source))
    }
}

/// Validate and format an address for the transport
fn mailbox(addr: &MailAddress) -> Result<String, String> {
    let email = addr.email.trim();
    if !sanitize::is_valid_email(email) {
        return Err(format!("invalid email address: {}", email));
    }
    Ok(sanitize::format_mailbox(addr))
}
