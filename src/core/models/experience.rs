//! Work experience model
//!
//! Experience entries are listed newest first. Their position in the list
//! decides which side of the timeline they are drawn on.

use serde::{Deserialize, Serialize};

/// A role held at an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    /// Organization name
    pub organization: String,
    /// Role title
    pub role: String,
    /// Free-form duration (e.g. "May 2025 – Present")
    pub duration: String,
    /// Description bullets, in display order
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl ExperienceItem {
    /// Create an experience entry
    pub fn new<I, S>(
        organization: impl Into<String>,
        role: impl Into<String>,
        duration: impl Into<String>,
        highlights: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            organization: organization.into(),
            role: role.into(),
            duration: duration.into(),
            highlights: highlights.into_iter().map(Into::into).collect(),
        }
    }
}
