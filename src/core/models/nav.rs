//! Navigation link model

use serde::{Deserialize, Serialize};

/// An entry in the navigation bar
///
/// `href` is an in-page anchor reference such as `#about`. It must name a
/// section of the composed page, which the page composer verifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Text shown in the navigation bar
    pub name: String,
    /// Anchor reference, `#` followed by a section identifier
    pub href: String,
}

impl NavLink {
    /// Create a navigation link
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }

    /// The section identifier this link targets, without the leading `#`
    ///
    /// Returns `None` when `href` is not an in-page anchor.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}
