//! Navigation bar state
//!
//! Two independent flags: whether the page is scrolled past a small offset
//! (transparent vs. opaque bar) and whether the mobile menu is expanded.

use crate::core::models::NavLink;

/// Where a navigation link was activated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPlacement {
    /// The always-visible bar on wide layouts
    Bar,
    /// The expandable mobile menu
    Menu,
}

/// State of the fixed navigation bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavBar {
    scroll_offset: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavBar {
    /// Offset past which the bar turns opaque
    pub const DEFAULT_SCROLL_OFFSET: f64 = 10.0;

    /// Create a bar at the top of the page with the menu collapsed
    #[must_use]
    pub const fn new(scroll_offset: f64) -> Self {
        Self {
            scroll_offset,
            scrolled: false,
            menu_open: false,
        }
    }

    /// Offset this bar compares scroll positions against
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Whether the page is scrolled past the offset
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether the mobile menu is expanded
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Record a new vertical scroll position; returns whether styling changed
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.scroll_offset;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Menu button pressed; returns the new menu state
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A link was activated; returns the anchor to scroll to
    ///
    /// Links in the mobile menu always collapse it.
    pub fn activate_link<'a>(
        &mut self,
        link: &'a NavLink,
        placement: LinkPlacement,
    ) -> Option<&'a str> {
        if placement == LinkPlacement::Menu {
            self.menu_open = false;
        }
        link.anchor()
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCROLL_OFFSET)
    }
}
