//! Page session
//!
//! Wires the pieces a browser would: a viewport, one reveal tracker per
//! tracked section, and the navigation bar. Every interaction (scroll,
//! resize, link activation) runs synchronously and delivers the resulting
//! intersection notifications before returning.

use log::debug;
use serde::Serialize;

use crate::adapters::HeadlessViewport;
use crate::core::models::{NavLink, RevealOptions, SectionId};
use crate::core::services::{LinkPlacement, NavBar, Page, PageLayout, VisibilityTracker};

/// Observable state of a session at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Vertical scroll offset
    pub scroll_y: f64,
    /// Whether the header is in its scrolled style
    pub scrolled: bool,
    /// Whether the mobile menu is expanded
    pub menu_open: bool,
    /// Revealed sections in page order
    pub revealed: Vec<SectionId>,
}

/// A mounted page in a headless viewport
#[derive(Debug)]
pub struct PageSession<'a> {
    page: &'a Page,
    viewport: HeadlessViewport,
    trackers: Vec<(SectionId, VisibilityTracker)>,
    nav: NavBar,
    mounted: bool,
}

impl<'a> PageSession<'a> {
    /// Lay out `page` in a `width` x `height` viewport
    ///
    /// Nothing is observed until [`PageSession::mount`].
    #[must_use]
    pub fn new(page: &'a Page, width: f64, height: f64, options: RevealOptions, nav: NavBar) -> Self {
        let layout = PageLayout::estimate(page, width, height);
        let viewport = HeadlessViewport::with_layout(width, height, &layout);
        let trackers = page
            .tracked_sections()
            .map(|section| (section.id.clone(), VisibilityTracker::new(options)))
            .collect();

        Self {
            page,
            viewport,
            trackers,
            nav,
            mounted: false,
        }
    }

    /// Attach every tracker to its section
    ///
    /// Sections already in view are revealed immediately. Returns the
    /// sections revealed by mounting.
    pub fn mount(&mut self) -> Vec<SectionId> {
        if self.mounted {
            return Vec::new();
        }
        for (id, tracker) in &mut self.trackers {
            tracker.attach(&mut self.viewport, Some(id));
        }
        self.mounted = true;
        self.nav.on_scroll(self.viewport.scroll_y());
        self.pump()
    }

    /// Detach every tracker; reveal state is kept
    pub fn unmount(&mut self) {
        for (_, tracker) in &mut self.trackers {
            tracker.detach(&mut self.viewport);
        }
        self.mounted = false;
    }

    /// Whether trackers are attached
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Scroll to `y`; returns the sections this revealed
    pub fn scroll_to(&mut self, y: f64) -> Vec<SectionId> {
        self.viewport.scroll_to(y);
        self.after_scroll()
    }

    /// Scroll by `dy`; returns the sections this revealed
    pub fn scroll_by(&mut self, dy: f64) -> Vec<SectionId> {
        self.viewport.scroll_by(dy);
        self.after_scroll()
    }

    /// Resize the viewport and re-estimate the layout
    pub fn resize(&mut self, width: f64, height: f64) -> Vec<SectionId> {
        let layout = PageLayout::estimate(self.page, width, height);
        self.viewport.relayout(width, height, &layout);
        self.after_scroll()
    }

    /// Activate a navigation link
    ///
    /// Scrolls to the section the link lands on. An anchor that matches no
    /// section leaves the scroll position alone. Returns the section
    /// scrolled to.
    pub fn activate(&mut self, link: &NavLink, placement: LinkPlacement) -> Option<SectionId> {
        let anchor = self.nav.activate_link(link, placement)?;
        self.scroll_to_anchor(anchor)
    }

    /// Follow an in-page reference such as `#contact`
    pub fn goto(&mut self, href: &str) -> Option<SectionId> {
        let anchor = href.strip_prefix('#').unwrap_or(href);
        self.scroll_to_anchor(anchor)
    }

    /// Press the menu button; returns whether the menu is now open
    pub fn toggle_menu(&mut self) -> bool {
        self.nav.toggle_menu()
    }

    /// Change reveal options on every tracker
    pub fn reconfigure(&mut self, options: RevealOptions) -> Vec<SectionId> {
        for (_, tracker) in &mut self.trackers {
            tracker.reconfigure(&mut self.viewport, options);
        }
        self.pump()
    }

    /// Whether `id` has been revealed
    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.tracker(id).is_some_and(VisibilityTracker::is_revealed)
    }

    /// Tracker for a section
    #[must_use]
    pub fn tracker(&self, id: &str) -> Option<&VisibilityTracker> {
        self.trackers
            .iter()
            .find(|(section, _)| section.as_str() == id)
            .map(|(_, tracker)| tracker)
    }

    /// Revealed sections in page order
    #[must_use]
    pub fn revealed(&self) -> Vec<SectionId> {
        self.trackers
            .iter()
            .filter(|(_, tracker)| tracker.is_revealed())
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Navigation bar state
    #[must_use]
    pub const fn nav(&self) -> &NavBar {
        &self.nav
    }

    /// The viewport
    #[must_use]
    pub const fn viewport(&self) -> &HeadlessViewport {
        &self.viewport
    }

    /// Current observable state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            scroll_y: self.viewport.scroll_y(),
            scrolled: self.nav.is_scrolled(),
            menu_open: self.nav.is_menu_open(),
            revealed: self.revealed(),
        }
    }

    fn scroll_to_anchor(&mut self, anchor: &str) -> Option<SectionId> {
        let Some(section) = self.page.section(anchor) else {
            debug!("No section for anchor '#{anchor}'");
            return None;
        };
        let id = section.id.clone();
        if self.viewport.scroll_into_view(&id) {
            self.after_scroll();
            Some(id)
        } else {
            None
        }
    }

    fn after_scroll(&mut self) -> Vec<SectionId> {
        self.nav.on_scroll(self.viewport.scroll_y());
        self.pump()
    }

    fn pump(&mut self) -> Vec<SectionId> {
        let mut revealed = Vec::new();
        for (observation, entry) in self.viewport.take_notifications() {
            for (id, tracker) in &mut self.trackers {
                if *id == entry.target && tracker.notify(observation, &entry) {
                    revealed.push(id.clone());
                }
            }
        }
        revealed
    }
}

impl Drop for PageSession<'_> {
    fn drop(&mut self) {
        self.unmount();
    }
}
