//! Viewport intersection port
//!
//! The narrow capability the reveal tracker needs from its host: register an
//! element for observation and later release it. The host reports
//! intersection changes back as `(ObservationId, IntersectionEntry)` pairs.

use serde::Serialize;

use super::super::models::{Rect, RevealOptions, SectionId};

/// Handle for one registered observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObservationId(pub u64);

impl std::fmt::Display for ObservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "obs-{}", self.0)
    }
}

/// Intersection state of an observed element at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntersectionEntry {
    /// The observed element
    pub target: SectionId,
    /// Whether any part of the element (including an edge) touches the root
    pub is_intersecting: bool,
    /// Visible fraction of the element's area, in `[0, 1]`
    pub intersection_ratio: f64,
    /// Element bounds relative to the viewport
    pub bounding_rect: Rect,
    /// Viewport bounds after the root margin was applied
    pub root_rect: Rect,
}

impl IntersectionEntry {
    /// Whether this entry satisfies `options`
    #[must_use]
    pub fn meets(&self, options: &RevealOptions) -> bool {
        self.is_intersecting && self.intersection_ratio >= options.threshold()
    }
}

/// Source of viewport intersection notifications
///
/// Implementations must queue a notification describing the element's
/// current state as soon as it is observed, so an element that is already
/// on screen does not wait for the next scroll.
pub trait IntersectionSource {
    /// Start observing `target`
    fn observe(&mut self, target: &SectionId, options: &RevealOptions) -> ObservationId;

    /// Stop observing; unknown or already released handles are ignored
    fn unobserve(&mut self, id: ObservationId);
}
