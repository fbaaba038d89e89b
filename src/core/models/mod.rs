//! Domain models for folio
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`NavLink`] - A navigation entry pointing at a section anchor
//! - [`ExperienceItem`], [`SkillItem`], [`CertificationItem`], [`ProjectItem`],
//!   [`LanguageItem`] - Content records rendered by the page sections
//! - [`Profile`] - Who the page is about
//! - [`Content`] - Every record above, bundled for one page
//! - [`SectionId`] - A validated in-page anchor identifier
//! - [`Glyph`] - The closed set of vector icons the page can draw
//! - [`RevealOptions`] - Threshold and root margin for viewport observation
//! - [`ContactMessage`] - A validated contact form submission
//! - [`Rect`] - Axis-aligned geometry used by the headless viewport

mod certification;
mod contact;
mod content;
mod experience;
mod geometry;
mod glyph;
mod language;
mod nav;
mod profile;
mod project;
mod reveal;
mod section;
mod skill;

pub use certification::CertificationItem;
pub use contact::{ContactError, ContactMessage};
pub use content::Content;
pub use experience::ExperienceItem;
pub use geometry::Rect;
pub use glyph::Glyph;
pub use language::LanguageItem;
pub use nav::NavLink;
pub use profile::{Profile, SocialLink, SocialNetwork};
pub use project::ProjectItem;
pub use reveal::{Length, OptionsError, RevealOptions, RootMargin};
pub use section::{InvalidSectionId, SectionId};
pub use skill::SkillItem;
