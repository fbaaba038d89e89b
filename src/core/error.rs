//! Errors raised while loading content and composing the page
//!
//! Rendering itself cannot fail; everything that can go wrong is caught when
//! the page is composed at startup.

use std::path::PathBuf;

use thiserror::Error;

use super::models::{InvalidSectionId, SectionId};

/// Errors from content loading and page composition
#[derive(Debug, Error)]
pub enum SiteError {
    /// A navigation link points at an anchor no section declares
    #[error("nav link '{name}' targets '{href}', which matches no section")]
    UnresolvedAnchor {
        /// Link text
        name: String,
        /// Link target
        href: String,
    },

    /// A navigation link whose target is not an in-page anchor
    #[error("nav link '{name}' has malformed target '{href}' (expected '#section-id')")]
    MalformedAnchor {
        /// Link text
        name: String,
        /// Link target
        href: String,
    },

    /// Two sections share an identifier
    #[error("duplicate section identifier: {0}")]
    DuplicateSection(SectionId),

    /// A section identifier that cannot be used as an anchor
    #[error(transparent)]
    InvalidSectionId(#[from] InvalidSectionId),

    /// Content file could not be read
    #[error("failed to read content file {path}: {source}")]
    ContentRead {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Content file is not valid content TOML
    #[error("failed to parse content file {path}: {source}")]
    ContentParse {
        /// File that failed
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },
}
