//! Tests for the HTTP-agnostic API handlers

use std::sync::Mutex;

use folio::api::{self, ApiError, ApiResponse, ContactRequest, ErrorCode};
use folio::core::models::ContactMessage;
use folio::core::ports::ContactSink;

use crate::common::builtin_page;

/// Sink that keeps messages in memory, or fails on demand
#[derive(Default)]
struct MemorySink {
    messages: Mutex<Vec<ContactMessage>>,
    fail: bool,
}

impl ContactSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn deliver(&self, message: &ContactMessage) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("mail server down");
        }
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

fn request(name: &str, email: &str, message: &str) -> ContactRequest {
    ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn test_get_sections() {
    let data = api::get_sections(&builtin_page()).unwrap();
    assert_eq!(data.sections.len(), 7);
    assert_eq!(data.sections[0].id, "home");
    assert!(!data.sections[0].tracked);
    assert!(data.sections[1..].iter().all(|s| s.tracked));
}

#[test]
fn test_get_section() {
    let page = builtin_page();
    let skills = api::get_section(&page, "skills").unwrap();
    assert_eq!(skills.title, "Skills & Tools");

    let err = api::get_section(&page, "blog").unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(err.status_code(), 404);
}

#[test]
fn test_get_nav_resolves_every_link() {
    let data = api::get_nav(&builtin_page()).unwrap();
    assert_eq!(data.links.len(), 5);
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["links"][0]["status"]["status"], "resolved");
    assert_eq!(json["links"][0]["status"]["section"], "about");
}

#[test]
fn test_submit_contact_delivers() {
    let sink = MemorySink::default();
    let receipt = api::submit_contact(&request("Ada", "ada@example.com", "Hi"), &sink).unwrap();

    assert_eq!(receipt.sink, "memory");
    let stored = sink.messages.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].received_at, receipt.received_at);
}

#[test]
fn test_submit_contact_invalid_is_bad_request() {
    let sink = MemorySink::default();
    let err = api::submit_contact(&request("Ada", "not-an-email", "Hi"), &sink).unwrap_err();

    assert_eq!(err.code, ErrorCode::BadRequest);
    assert!(err.message.contains("not-an-email"));
    assert!(sink.messages.lock().unwrap().is_empty());
}

#[test]
fn test_submit_contact_sink_failure_is_internal() {
    let sink = MemorySink {
        fail: true,
        ..MemorySink::default()
    };
    let err = api::submit_contact(&request("Ada", "ada@example.com", "Hi"), &sink).unwrap_err();
    assert_eq!(err.status_code(), 500);
}

#[test]
fn test_contact_request_fields_default_to_empty() {
    let req: ContactRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
    assert!(req.name.is_empty());
    let err = api::submit_contact(&req, &MemorySink::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
}

#[test]
fn test_envelope_shapes() {
    let ok = serde_json::to_value(ApiResponse::success(1)).unwrap();
    assert_eq!(ok, serde_json::json!({"success": true, "data": 1}));

    let err = serde_json::to_value(ApiResponse::error(&ApiError::payload_too_large(16))).unwrap();
    assert_eq!(err["success"], false);
    assert_eq!(err["error"]["code"], "PAYLOAD_TOO_LARGE");
    assert!(err.get("data").is_none());
}
