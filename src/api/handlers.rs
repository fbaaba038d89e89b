//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use log::{info, warn};

use crate::core::models::ContactMessage;
use crate::core::ports::ContactSink;
use crate::core::services::{LinkStatus, Page, Section};

use super::error::ApiError;
use super::types::{ContactReceipt, ContactRequest, NavData, SectionInfo, SectionsData};

// =============================================================================
// PAGE
// =============================================================================

/// List the page's sections
pub fn get_sections(page: &Page) -> Result<SectionsData, ApiError> {
    let sections = page
        .sections()
        .iter()
        .map(section_info)
        .collect();
    Ok(SectionsData { sections })
}

/// Get one section by identifier
pub fn get_section(page: &Page, id: &str) -> Result<SectionInfo, ApiError> {
    page.section(id)
        .map(section_info)
        .ok_or_else(|| ApiError::not_found(format!("Section not found: {id}")))
}

fn section_info(section: &Section) -> SectionInfo {
    SectionInfo {
        id: section.id.to_string(),
        kind: section.kind,
        title: section.title.clone(),
        tracked: section.kind.is_tracked(),
    }
}

/// Navigation links with their resolution
pub fn get_nav(page: &Page) -> Result<NavData, ApiError> {
    let links = Page::check_links(page.content()).map_err(|e| ApiError::internal(e.to_string()))?;
    if let Some(bad) = links
        .iter()
        .find(|l| !matches!(l.status, LinkStatus::Resolved(_)))
    {
        // Composed pages only hold resolved links.
        return Err(ApiError::internal(format!(
            "Navigation link '{}' does not resolve",
            bad.link.name
        )));
    }
    Ok(NavData { links })
}

// =============================================================================
// CONTACT
// =============================================================================

/// Validate a contact submission and hand it to `sink`
pub fn submit_contact(
    req: &ContactRequest,
    sink: &dyn ContactSink,
) -> Result<ContactReceipt, ApiError> {
    let message = ContactMessage::new(&req.name, &req.email, &req.message).map_err(|e| {
        warn!("Rejected contact submission: {e}");
        ApiError::from(e)
    })?;

    sink.deliver(&message).map_err(|e| {
        warn!("Contact sink '{}' failed: {e:#}", sink.name());
        ApiError::internal(format!("Failed to deliver message: {e}"))
    })?;

    info!("Contact message from {} via {}", message.email, sink.name());
    Ok(ContactReceipt {
        received_at: message.received_at,
        sink: sink.name().to_string(),
    })
}
