//! Certification model

use serde::{Deserialize, Serialize};

use super::Glyph;

/// A certification earned from an issuing body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationItem {
    /// Certification name
    pub name: String,
    /// Issuing body
    pub issuer: String,
    /// Icon drawn beside the entry
    pub glyph: Glyph,
}

impl CertificationItem {
    /// Create a certification entry
    pub fn new(name: impl Into<String>, issuer: impl Into<String>, glyph: Glyph) -> Self {
        Self {
            name: name.into(),
            issuer: issuer.into(),
            glyph,
        }
    }
}
