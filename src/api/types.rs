//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use crate::core::services::{LinkResolution, SectionKind};

use super::error::{ApiError, ApiErrorData};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.into()),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Contact form fields as posted by the page script
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    /// Sender name
    #[serde(default)]
    pub name: String,
    /// Reply address
    #[serde(default)]
    pub email: String,
    /// Message body
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// One section of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    /// Anchor identifier
    pub id: String,
    /// Section kind
    pub kind: SectionKind,
    /// Heading
    pub title: String,
    /// Whether the section fades in on first view
    pub tracked: bool,
}

/// `GET /api/v1/sections`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionsData {
    /// Sections in page order
    pub sections: Vec<SectionInfo>,
}

/// `GET /api/v1/nav`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavData {
    /// Navigation links and the section each lands on
    pub links: Vec<LinkResolution>,
}

/// `POST /api/v1/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    /// When the message was accepted (RFC3339)
    pub received_at: String,
    /// Sink that took the message
    pub sink: String,
}
