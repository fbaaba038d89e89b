//! Page composition service
//!
//! The page is a fixed sequence of sections. Each section has an identifier
//! that serves as both its in-page anchor and the element its reveal tracker
//! observes. Composition checks that every navigation link lands on exactly
//! one section and refuses to build a page otherwise.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::error::SiteError;
use crate::core::models::{Content, NavLink, SectionId};

/// The kinds of section the page is built from, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Full-height banner with name and portrait
    Hero,
    /// About-me paragraph
    About,
    /// Work experience timeline
    Experience,
    /// Skill badges
    Skills,
    /// Certification list
    Certifications,
    /// Project card grid
    Projects,
    /// Contact form and languages
    Contact,
}

impl SectionKind {
    /// Every section, in the order it appears on the page
    pub const ORDER: [Self; 7] = [
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Skills,
        Self::Certifications,
        Self::Projects,
        Self::Contact,
    ];

    /// Anchor identifier of this section
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Heading shown above the section body
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hero => "",
            Self::About => "About Me",
            Self::Experience => "Work Experience",
            Self::Skills => "Skills & Tools",
            Self::Certifications => "Certifications",
            Self::Projects => "My Projects",
            Self::Contact => "Get In Touch",
        }
    }

    /// Whether the section fades in when it enters the viewport
    ///
    /// The hero animates on load instead.
    #[must_use]
    pub const fn is_tracked(self) -> bool {
        !matches!(self, Self::Hero)
    }
}

/// A composed section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Anchor and tracker sentinel
    pub id: SectionId,
    /// What the section renders
    pub kind: SectionKind,
    /// Heading (empty for the hero)
    pub title: String,
}

/// Outcome of resolving one navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "section", rename_all = "lowercase")]
pub enum LinkStatus {
    /// Lands on this section
    Resolved(SectionId),
    /// Well-formed anchor that no section declares
    Unresolved,
    /// Not an in-page anchor at all
    Malformed,
}

/// A navigation link and where it lands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkResolution {
    /// The link as authored
    pub link: NavLink,
    /// Where it lands
    pub status: LinkStatus,
}

impl LinkResolution {
    /// Convert a failed resolution into the matching error
    #[must_use]
    pub fn error(&self) -> Option<SiteError> {
        let name = self.link.name.clone();
        let href = self.link.href.clone();
        match self.status {
            LinkStatus::Resolved(_) => None,
            LinkStatus::Unresolved => Some(SiteError::UnresolvedAnchor { name, href }),
            LinkStatus::Malformed => Some(SiteError::MalformedAnchor { name, href }),
        }
    }
}

/// A composed page: content plus its fixed section sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    content: Content,
    sections: Vec<Section>,
}

impl Page {
    /// Compose the page, failing on the first navigation link that does not
    /// resolve to a section
    pub fn compose(content: Content) -> Result<Self, SiteError> {
        let sections = Self::build_sections()?;

        if let Some(err) = resolve_links(&sections, &content.nav)
            .iter()
            .find_map(LinkResolution::error)
        {
            return Err(err);
        }

        Ok(Self { content, sections })
    }

    /// Resolve every navigation link without failing
    ///
    /// Used to report on content that [`Page::compose`] would reject.
    pub fn check_links(content: &Content) -> Result<Vec<LinkResolution>, SiteError> {
        let sections = Self::build_sections()?;
        Ok(resolve_links(&sections, &content.nav))
    }

    fn build_sections() -> Result<Vec<Section>, SiteError> {
        let mut seen = BTreeSet::new();
        let mut sections = Vec::with_capacity(SectionKind::ORDER.len());

        for kind in SectionKind::ORDER {
            let id = SectionId::parse(kind.id())?;
            if !seen.insert(id.clone()) {
                return Err(SiteError::DuplicateSection(id));
            }
            sections.push(Section {
                id,
                kind,
                title: kind.title().to_string(),
            });
        }

        Ok(sections)
    }

    /// Content the page renders
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Sections in page order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections that carry a reveal tracker
    pub fn tracked_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.kind.is_tracked())
    }

    /// Look up a section by identifier
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    /// The section a navigation link lands on
    #[must_use]
    pub fn resolve(&self, link: &NavLink) -> Option<&Section> {
        link.anchor().and_then(|anchor| self.section(anchor))
    }

    /// The section an anchor reference (`#id`) lands on
    #[must_use]
    pub fn resolve_href(&self, href: &str) -> Option<&Section> {
        href.strip_prefix('#').and_then(|anchor| self.section(anchor))
    }
}

fn resolve_links(sections: &[Section], links: &[NavLink]) -> Vec<LinkResolution> {
    links
        .iter()
        .map(|link| {
            let status = match link.anchor() {
                None => LinkStatus::Malformed,
                Some(anchor) => {
                    let mut matches = sections.iter().filter(|s| s.id.as_str() == anchor);
                    match (matches.next(), matches.next()) {
                        (Some(section), None) => LinkStatus::Resolved(section.id.clone()),
                        _ => LinkStatus::Unresolved,
                    }
                },
            };
            LinkResolution {
                link: link.clone(),
                status,
            }
        })
        .collect()
}
