//! Project model

use serde::{Deserialize, Serialize};

/// A project card in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    /// Project title
    pub title: String,
    /// One-paragraph description
    pub description: String,
    /// Technology tags, in display order
    #[serde(default)]
    pub tech: Vec<String>,
    /// Cover image URL
    pub image_url: String,
    /// Optional outbound link to the project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectItem {
    /// Create a project card without an outbound link
    pub fn new<I, S>(
        title: impl Into<String>,
        description: impl Into<String>,
        tech: I,
        image_url: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            tech: tech.into_iter().map(Into::into).collect(),
            image_url: image_url.into(),
            link: None,
        }
    }

    /// Attach an outbound link
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}
