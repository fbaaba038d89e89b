//! The person the page is about

use serde::{Deserialize, Serialize};

use super::Glyph;

/// Professional networks linked from the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    /// Professional network profile
    LinkedIn,
    /// Code-hosting profile
    GitHub,
}

impl SocialNetwork {
    /// Icon drawn for this network
    #[must_use]
    pub const fn glyph(self) -> Glyph {
        match self {
            Self::LinkedIn => Glyph::LinkedIn,
            Self::GitHub => Glyph::GitHub,
        }
    }

    /// Accessible label for the link
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
        }
    }
}

/// An outbound profile link, opened in a new browsing context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Which network the link points to
    pub network: SocialNetwork,
    /// Profile URL
    pub url: String,
}

/// Identity and contact details shown in the hero, about and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Short brand mark shown in the navigation bar (e.g. "SC.")
    pub brand: String,
    /// Headline under the name
    pub headline: String,
    /// One-line tagline
    pub tagline: String,
    /// About-me paragraph
    pub about: String,
    /// Where the person is based
    pub location: String,
    /// Portrait image URL
    pub portrait_url: String,
    /// Address pre-filled in the contact form
    pub email: String,
    /// Invitation shown above the contact form
    pub contact_blurb: String,
    /// Footer links
    #[serde(default)]
    pub social: Vec<SocialLink>,
}
