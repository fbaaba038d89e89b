//! Headless viewport
//!
//! Implements the `IntersectionSource` port over a simulated viewport: a
//! window of fixed size scrolled vertically over a document whose element
//! boxes come from a [`PageLayout`]. Notifications follow browser
//! intersection-observer rules closely enough for the reveal tracker:
//!
//! - observing an element queues one entry describing its current state
//! - after a scroll or resize, an entry is queued only for observations
//!   whose "intersecting" flag or threshold side changed
//! - unobserving drops the observation and anything still queued for it

use std::collections::{BTreeMap, HashMap, VecDeque};

use log::debug;

use crate::core::models::{Rect, RevealOptions, SectionId};
use crate::core::ports::{IntersectionEntry, IntersectionSource, ObservationId};
use crate::core::services::PageLayout;

#[derive(Debug, Clone)]
struct Observation {
    target: SectionId,
    options: RevealOptions,
    last: Option<(bool, bool)>,
}

/// A simulated browser viewport
#[derive(Debug, Clone)]
pub struct HeadlessViewport {
    width: f64,
    height: f64,
    scroll_y: f64,
    document_height: f64,
    elements: HashMap<SectionId, Rect>,
    observations: BTreeMap<ObservationId, Observation>,
    pending: VecDeque<(ObservationId, IntersectionEntry)>,
    next_id: u64,
}

impl HeadlessViewport {
    /// Create an empty viewport scrolled to the top
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            scroll_y: 0.0,
            document_height: height.max(0.0),
            elements: HashMap::new(),
            observations: BTreeMap::new(),
            pending: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Create a viewport over an estimated page layout
    #[must_use]
    pub fn with_layout(width: f64, height: f64, layout: &PageLayout) -> Self {
        let mut viewport = Self::new(width, height);
        viewport.apply_layout(layout);
        viewport
    }

    /// Replace element geometry with `layout`
    pub fn apply_layout(&mut self, layout: &PageLayout) {
        self.relayout(self.width, self.height, layout);
    }

    /// Place (or move) a single element
    pub fn place(&mut self, id: SectionId, rect: Rect) {
        self.document_height = self.document_height.max(rect.bottom());
        self.elements.insert(id, rect);
        self.refresh();
    }

    /// Remove an element from the document
    ///
    /// Observations of it stay registered and report it as not intersecting.
    pub fn remove(&mut self, id: &SectionId) {
        self.elements.remove(id);
        self.refresh();
    }

    /// Viewport width
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Current vertical scroll offset
    #[must_use]
    pub const fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Largest reachable scroll offset
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.height).max(0.0)
    }

    /// Number of live observations
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    /// Scroll to `y`, clamped to the document
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
        self.refresh();
    }

    /// Scroll by `dy`
    pub fn scroll_by(&mut self, dy: f64) {
        self.scroll_to(self.scroll_y + dy);
    }

    /// Scroll so `id` starts at the top of the viewport
    ///
    /// Returns `false`, without scrolling, when the element is not in the
    /// document.
    pub fn scroll_into_view(&mut self, id: &SectionId) -> bool {
        match self.elements.get(id) {
            Some(rect) => {
                let top = rect.y;
                self.scroll_to(top);
                true
            },
            None => {
                debug!("No element '{id}' to scroll to");
                false
            },
        }
    }

    /// Change the viewport size
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.document_height = self.document_height.max(self.height);
        self.scroll_y = self.scroll_y.min(self.max_scroll());
        self.refresh();
    }

    /// Change the viewport size and replace element geometry in one step
    ///
    /// Observations are checked once, against the new layout only.
    pub fn relayout(&mut self, width: f64, height: f64, layout: &PageLayout) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.elements = layout
            .sections
            .iter()
            .map(|section| (section.id.clone(), section.rect))
            .collect();
        self.document_height = layout.document_height.max(self.height);
        self.scroll_y = self.scroll_y.min(self.max_scroll());
        self.refresh();
    }

    /// Drain queued notifications in delivery order
    pub fn take_notifications(&mut self) -> Vec<(ObservationId, IntersectionEntry)> {
        self.pending.drain(..).collect()
    }

    /// Intersection state of `target` right now
    #[must_use]
    pub fn entry_for(&self, target: &SectionId, options: &RevealOptions) -> IntersectionEntry {
        let root = Rect::new(0.0, self.scroll_y, self.width, self.height);
        let root = options.root_margin().apply(&root);
        let root_rect = root.translate(0.0, -self.scroll_y);

        let Some(element) = self.elements.get(target) else {
            return IntersectionEntry {
                target: target.clone(),
                is_intersecting: false,
                intersection_ratio: 0.0,
                bounding_rect: Rect::default(),
                root_rect,
            };
        };

        let overlap = element.intersection(&root);
        let is_intersecting = overlap.is_some();
        let intersection_ratio = match overlap {
            Some(_) if element.area() <= 0.0 => 1.0,
            Some(area) => (area.area() / element.area()).clamp(0.0, 1.0),
            None => 0.0,
        };

        IntersectionEntry {
            target: target.clone(),
            is_intersecting,
            intersection_ratio,
            bounding_rect: element.translate(0.0, -self.scroll_y),
            root_rect,
        }
    }

    fn refresh(&mut self) {
        let ids: Vec<ObservationId> = self.observations.keys().copied().collect();
        for id in ids {
            self.check(id, false);
        }
    }

    fn check(&mut self, id: ObservationId, initial: bool) {
        let Some(observation) = self.observations.get(&id) else {
            return;
        };
        let entry = self.entry_for(&observation.target, &observation.options);
        let key = (
            entry.is_intersecting,
            entry.intersection_ratio >= observation.options.threshold(),
        );

        if initial || observation.last != Some(key) {
            if let Some(observation) = self.observations.get_mut(&id) {
                observation.last = Some(key);
            }
            self.pending.push_back((id, entry));
        }
    }
}

impl IntersectionSource for HeadlessViewport {
    fn observe(&mut self, target: &SectionId, options: &RevealOptions) -> ObservationId {
        let id = ObservationId(self.next_id);
        self.next_id += 1;
        self.observations.insert(
            id,
            Observation {
                target: target.clone(),
                options: *options,
                last: None,
            },
        );
        self.check(id, true);
        id
    }

    fn unobserve(&mut self, id: ObservationId) {
        if self.observations.remove(&id).is_some() {
            self.pending.retain(|(pending, _)| *pending != id);
        }
    }
}
