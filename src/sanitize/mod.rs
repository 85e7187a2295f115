//! Input sanitization for untrusted settings and request strings
//!
//! Every string that reaches the transport goes through here first:
//! free text is trimmed, display names are HTML-escaped, and addresses
//! must be RFC-shaped.

use crate::domain::MailAddress;
use validator::ValidateEmail;

/// Trim surrounding whitespace from free text (subjects, setting values)
pub fn clean_text(value: &str) -> String {
    value.trim().to_string()
}

/// Trim and HTML-escape a display name
pub fn clean_name(value: &str) -> String {
    html_escape::encode_safe(value.trim()).into_owned()
}

/// Check that an address is RFC-shaped
pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

/// Format an address as `"Name <email>"`, or the bare address when no
/// usable name is present
pub fn format_mailbox(addr: &MailAddress) -> String {
    let email = addr.email.trim();
    match addr.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => {
            format!("{} <{}>", html_escape::encode_safe(name), email)
        }
        _ => email.to_string(),
    }
}
