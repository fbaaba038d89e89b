//! Skill model

use serde::{Deserialize, Serialize};

use super::Glyph;

/// A named skill rendered as a badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    /// Skill name shown on the badge
    pub name: String,
    /// Icon shown before the name
    pub glyph: Glyph,
}

impl SkillItem {
    /// Create a skill badge
    pub fn new(name: impl Into<String>, glyph: Glyph) -> Self {
        Self {
            name: name.into(),
            glyph,
        }
    }
}
