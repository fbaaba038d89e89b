//! Section identifiers
//!
//! A section identifier doubles as the in-page anchor target and as the
//! element the reveal tracker observes, so it has to be usable verbatim in
//! both an HTML `id` attribute and a URL fragment.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static SECTION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Error returned for identifiers that cannot be used as anchors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid section identifier: {0:?} (expected lowercase words joined by '-')")]
pub struct InvalidSectionId(pub String);

/// A validated section identifier (e.g. `experience`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Parse an identifier
    pub fn parse(id: impl Into<String>) -> Result<Self, InvalidSectionId> {
        let id = id.into();
        if SECTION_ID.is_match(&id) {
            Ok(Self(id))
        } else {
            Err(InvalidSectionId(id))
        }
    }

    /// The identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The anchor reference for this section (`#id`)
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SectionId {
    type Err = InvalidSectionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SectionId {
    type Error = InvalidSectionId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
