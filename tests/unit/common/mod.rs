//! Common test utilities shared across unit tests
//!
//! - [`FakeIntersectionSource`] - Records observe/unobserve calls
//! - Builders for section ids, entries, and pages

use folio::content;
use folio::core::models::{Rect, RevealOptions, SectionId};
use folio::core::ports::{IntersectionEntry, IntersectionSource, ObservationId};
use folio::core::services::Page;

/// Intersection source that only records what was asked of it
///
/// Notifications are fed to the tracker by the test itself.
#[derive(Debug, Default)]
pub struct FakeIntersectionSource {
    next_id: u64,
    /// Live observations in registration order
    pub live: Vec<(ObservationId, SectionId, RevealOptions)>,
    /// Every released handle, in order
    pub released: Vec<ObservationId>,
}

impl FakeIntersectionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of the only live observation
    pub fn only_live(&self) -> ObservationId {
        assert_eq!(self.live.len(), 1, "expected exactly one live observation");
        self.live[0].0
    }

    /// Total observe calls so far
    pub fn observe_calls(&self) -> u64 {
        self.next_id
    }
}

impl IntersectionSource for FakeIntersectionSource {
    fn observe(&mut self, target: &SectionId, options: &RevealOptions) -> ObservationId {
        self.next_id += 1;
        let id = ObservationId(self.next_id);
        self.live.push((id, target.clone(), *options));
        id
    }

    fn unobserve(&mut self, id: ObservationId) {
        self.live.retain(|(live, _, _)| *live != id);
        self.released.push(id);
    }
}

/// Parse a section id
pub fn sid(id: &str) -> SectionId {
    SectionId::parse(id).unwrap()
}

/// An entry for `target`
pub fn entry(target: &str, is_intersecting: bool, ratio: f64) -> IntersectionEntry {
    IntersectionEntry {
        target: sid(target),
        is_intersecting,
        intersection_ratio: ratio,
        bounding_rect: Rect::new(0.0, 0.0, 100.0, 100.0),
        root_rect: Rect::new(0.0, 0.0, 100.0, 100.0),
    }
}

/// The page composed from built-in content
pub fn builtin_page() -> Page {
    Page::compose(content::builtin()).unwrap()
}
