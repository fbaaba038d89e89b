//! The complete set of content records for one page

use serde::{Deserialize, Serialize};

use super::{
    CertificationItem, ExperienceItem, LanguageItem, NavLink, Profile, ProjectItem, SkillItem,
};

/// All content the page renders, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Who the page is about
    pub profile: Profile,
    /// Navigation bar entries
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Work history, newest first
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    /// Skill badges
    #[serde(default)]
    pub skills: Vec<SkillItem>,
    /// Certifications
    #[serde(default)]
    pub certifications: Vec<CertificationItem>,
    /// Project cards, in gallery order
    #[serde(default)]
    pub projects: Vec<ProjectItem>,
    /// Spoken languages shown under the contact form
    #[serde(default)]
    pub languages: Vec<LanguageItem>,
}
