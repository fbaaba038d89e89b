//! Contact delivery port
//!
//! The page ships a contact form but no delivery mechanism. Submissions are
//! handed to a sink; which service ultimately receives them is a deployment
//! choice made by plugging in an adapter.

use super::super::models::ContactMessage;

/// Destination for accepted contact form submissions
pub trait ContactSink: Send + Sync {
    /// Short name used in logs and status output
    fn name(&self) -> &'static str;

    /// Deliver one message
    fn deliver(&self, message: &ContactMessage) -> anyhow::Result<()>;
}
