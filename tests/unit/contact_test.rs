//! Tests for contact submissions and sinks

use folio::adapters::{LogSink, OutboxSink, SinkKind, sink_for};
use folio::config::SiteConfig;
use folio::core::models::{ContactError, ContactMessage};
use folio::core::ports::ContactSink;
use tempfile::TempDir;

#[test]
fn test_message_is_trimmed_and_stamped() {
    let msg = ContactMessage::new("  Ada ", " ada@example.com ", " Hello ").unwrap();
    assert_eq!(msg.name, "Ada");
    assert_eq!(msg.email, "ada@example.com");
    assert_eq!(msg.message, "Hello");
    assert!(chrono::DateTime::parse_from_rfc3339(&msg.received_at).is_ok());
}

#[test]
fn test_blank_fields_rejected() {
    assert_eq!(
        ContactMessage::new("   ", "a@b.c", "hi").unwrap_err(),
        ContactError::EmptyName
    );
    assert_eq!(
        ContactMessage::new("Ada", "a@b.c", "\n\t").unwrap_err(),
        ContactError::EmptyMessage
    );
}

#[test]
fn test_log_sink_accepts_everything() {
    let msg = ContactMessage::new("Ada", "ada@example.com", "Hello").unwrap();
    assert!(LogSink.deliver(&msg).is_ok());
    assert_eq!(LogSink.name(), "log");
}

#[test]
fn test_outbox_appends_json_lines() {
    let temp = TempDir::new().unwrap();
    let sink = OutboxSink::new(temp.path().join("nested/outbox.jsonl"));
    assert!(sink.read_all().unwrap().is_empty());

    let first = ContactMessage::new("Ada", "ada@example.com", "First").unwrap();
    let second = ContactMessage::new("Bob", "bob@example.com", "Second").unwrap();
    sink.deliver(&first).unwrap();
    sink.deliver(&second).unwrap();

    let stored = sink.read_all().unwrap();
    assert_eq!(stored, vec![first, second]);

    let text = std::fs::read_to_string(sink.path()).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_sink_for_kind() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("outbox.jsonl");
    assert_eq!(sink_for(SinkKind::Log, &path).name(), "log");
    assert_eq!(sink_for(SinkKind::Outbox, &path).name(), "outbox");
}

#[test]
fn test_sink_kind_names() {
    let config = SiteConfig::from_toml("[contact]\nsink = \"outbox\"\n").unwrap();
    assert_eq!(config.contact.sink, SinkKind::Outbox);
    assert!(SiteConfig::from_toml("[contact]\nsink = \"smtp\"\n").is_err());
    assert_eq!(SinkKind::Outbox.to_string(), "outbox");
    assert_eq!(SinkKind::default().to_string(), "log");
}
