//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the core ports:
//!
//! - `viewport` - Headless viewport implementing `IntersectionSource`
//! - `contact` - Contact sinks (log, JSON-lines outbox)

pub mod contact;
pub mod viewport;

pub use contact::{LogSink, OutboxSink, SinkKind, sink_for};
pub use viewport::HeadlessViewport;
