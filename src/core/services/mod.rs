//! Page behavior services
//!
//! Pure logic that operates on domain models. None of these touch a real
//! rendering surface; the viewport is reached through
//! [`IntersectionSource`](super::ports::IntersectionSource).
//!
//! - [`reveal`] - One-way "has entered view" tracker
//! - [`navbar`] - Scrolled styling and mobile menu state
//! - [`layout`] - Section geometry and timeline placement
//! - [`page`] - Fixed section composition and nav link resolution

pub mod layout;
pub mod navbar;
pub mod page;
pub mod reveal;

pub use layout::{LayoutMode, PageLayout, SectionBox, TimelinePlacement, timeline_placement};
pub use navbar::{LinkPlacement, NavBar};
pub use page::{LinkResolution, LinkStatus, Page, Section, SectionKind};
pub use reveal::{Reveal, VisibilityTracker};
