//! Spoken language model

use serde::{Deserialize, Serialize};

/// A spoken language and how well it is spoken
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageItem {
    /// Language name
    pub name: String,
    /// Flag emoji shown before the name
    #[serde(default)]
    pub flag: String,
    /// Proficiency label (e.g. "Fluent", "Native")
    pub proficiency: String,
}

impl LanguageItem {
    /// Create a language entry
    pub fn new(
        name: impl Into<String>,
        flag: impl Into<String>,
        proficiency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flag: flag.into(),
            proficiency: proficiency.into(),
        }
    }
}
