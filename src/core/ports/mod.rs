//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the page's core behavior and
//! the systems it runs against (a browser viewport, a mail pipeline).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete implementations.
//! Tests drive the reveal tracker with a fake intersection source instead of
//! a real rendering surface.

mod contact_sink;
mod intersection;

pub use contact_sink::ContactSink;
pub use intersection::{IntersectionEntry, IntersectionSource, ObservationId};
