//! End-to-end dispatch tests
//!
//! Drive the dispatcher from a raw settings store through to a spy
//! transport, the way an embedding application wires it up.

mod common;

use common::{production_store, QuotaExceededTransport, RecordingTransport};
use mailroom::config::MailerConfig;
use mailroom::dispatch::TEST_SUBJECT_PREFIX;
use mailroom::settings::keys;
use mailroom::template::MemoryResolver;
use mailroom::{DispatchResult, FailureKind, MailAddress, MailDispatcher, MailRequest};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn hello_request() -> MailRequest {
    MailRequest::new(vec![MailAddress::with_name("alice@x.com", "Alice")], "Hi")
        .html_body("<p>hi</p>")
}

#[tokio::test]
async fn disabled_install_never_touches_the_transport() {
    let mut store = production_store();
    store.set(keys::ENABLE_EMAILS, "off");

    let config = MailerConfig::from_store(&store).unwrap();
    let transport = Arc::new(RecordingTransport::new());
    let dispatcher = MailDispatcher::new(config, transport.clone());

    let result = dispatcher.send(hello_request()).await;

    assert!(matches!(
        result,
        DispatchResult::Failed {
            kind: FailureKind::Disabled,
            ..
        }
    ));
    assert!(transport.deliveries().is_empty());
}

#[tokio::test]
async fn round_trip_delivery() {
    let config = MailerConfig::from_store(&production_store()).unwrap();
    let transport = Arc::new(RecordingTransport::new());
    let dispatcher = MailDispatcher::new(config, transport.clone());

    let result = dispatcher.send(hello_request()).await;

    assert_eq!(result, DispatchResult::sent(Some("msg-1".to_string())));

    let deliveries = transport.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].to, vec!["Alice <alice@x.com>".to_string()]);
    assert_eq!(deliveries[0].source, "Bot <bot@x.com>");
    assert_eq!(deliveries[0].subject, "Hi");
    assert_eq!(deliveries[0].html_body, "<p>hi</p>");
    assert_eq!(deliveries[0].text_body, "");
}

#[tokio::test]
async fn test_mode_redirects_every_recipient() {
    let mut store = production_store();
    store
        .set(keys::TEST_MODE, "on")
        .set(keys::TEST_MODE_RECIPIENT_NAME, "QA")
        .set(keys::TEST_MODE_RECIPIENT_EMAIL, "qa@x.com");

    let config = MailerConfig::from_store(&store).unwrap();
    let transport = Arc::new(RecordingTransport::new());
    let dispatcher = MailDispatcher::new(config, transport.clone());

    let request = MailRequest::new(
        vec![
            MailAddress::with_name("alice@x.com", "Alice"),
            MailAddress::new("bob@x.com"),
        ],
        "Launch",
    )
    .html_body("<p>go</p>");

    let result = dispatcher.send(request).await;
    assert!(result.is_sent());

    let deliveries = transport.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].to, vec!["QA <qa@x.com>".to_string()]);
    assert!(deliveries[0].subject.starts_with(TEST_SUBJECT_PREFIX));
    assert_eq!(deliveries[0].subject, "Test - Launch");
}

#[tokio::test]
async fn transport_rejection_surfaces_as_result() {
    let config = MailerConfig::from_store(&production_store()).unwrap();
    let dispatcher = MailDispatcher::new(config, Arc::new(QuotaExceededTransport));

    let result = dispatcher.send(hello_request()).await;

    match result {
        DispatchResult::Failed { kind, detail } => {
            assert_eq!(kind, FailureKind::Transport);
            assert!(detail.contains("quota exceeded"));
        }
        other => panic!("Expected transport failure, got {:?}", other),
    }
}

#[tokio::test]
async fn templated_send_renders_into_html_body() {
    let config = MailerConfig::from_store(&production_store()).unwrap();
    let transport = Arc::new(RecordingTransport::new());

    let mut resolver = MemoryResolver::new();
    resolver.insert("welcome", "<h1>Welcome, {{user}}!</h1>");

    let dispatcher =
        MailDispatcher::new(config, transport.clone()).with_resolver(Arc::new(resolver));

    let request = MailRequest::new(vec![MailAddress::new("alice@x.com")], "Welcome").template(
        mailroom::domain::TemplateRef::new("welcome").var("user", "Alice"),
    );

    let result = dispatcher.send(request).await;
    assert!(result.is_sent());

    let deliveries = transport.deliveries();
    assert_eq!(deliveries[0].html_body, "<h1>Welcome, Alice!</h1>");
}

#[tokio::test]
async fn two_sends_get_independent_message_ids() {
    let config = MailerConfig::from_store(&production_store()).unwrap();
    let transport = Arc::new(RecordingTransport::new());
    let dispatcher = MailDispatcher::new(config, transport.clone());

    let first = dispatcher.send(hello_request()).await;
    let second = dispatcher.send(hello_request()).await;

    assert_eq!(first, DispatchResult::sent(Some("msg-1".to_string())));
    assert_eq!(second, DispatchResult::sent(Some("msg-2".to_string())));
    assert_eq!(transport.deliveries().len(), 2);
}
