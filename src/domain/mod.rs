//! Domain types for mail dispatch

pub mod mail;

pub use mail::{
    DispatchResult, FailureKind, MailAddress, MailBody, MailRequest, TemplateRef,
};
