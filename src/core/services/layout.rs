//! Layout service
//!
//! Two jobs: decide where experience entries sit on the timeline, and
//! estimate section geometry so the headless viewport has something to
//! scroll over. The estimate is deterministic and coarse; it tracks the
//! stylesheet's spacing closely enough that scrolling reveals sections in
//! the same order and at roughly the same offsets as a browser would.

use log::debug;
use serde::Serialize;

use crate::core::models::{Content, Rect, SectionId};

use super::page::{Page, SectionKind};

/// Viewport width at which the two-column layout starts
pub const WIDE_BREAKPOINT: f64 = 768.0;

/// Viewport width at which the project grid gets a third column
pub const GRID_THREE_COLUMNS: f64 = 1024.0;

const GUTTER: f64 = 24.0;
const LINE: f64 = 28.0;
const CHAR_WIDTH: f64 = 9.0;

/// Single-column or two-column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Below the breakpoint, everything stacks
    Narrow,
    /// At or above the breakpoint
    Wide,
}

impl LayoutMode {
    /// Layout used for a viewport of the given width
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        if width >= WIDE_BREAKPOINT {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

/// Where one experience entry sits on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelinePlacement {
    /// Left of the spine
    Left,
    /// Right of the spine
    Right,
    /// Single column beside the spine
    Stacked,
}

/// Placement of the entry at zero-based `index`
///
/// Even indices go left and odd indices go right in the wide layout.
#[must_use]
pub const fn timeline_placement(index: usize, mode: LayoutMode) -> TimelinePlacement {
    match mode {
        LayoutMode::Narrow => TimelinePlacement::Stacked,
        LayoutMode::Wide if index % 2 == 0 => TimelinePlacement::Left,
        LayoutMode::Wide => TimelinePlacement::Right,
    }
}

/// Geometry of one section in document coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBox {
    /// Which section
    pub id: SectionId,
    /// Its bounds
    pub rect: Rect,
}

/// Estimated geometry of the whole page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    /// Layout mode the estimate was made for
    pub mode: LayoutMode,
    /// Section boxes, top to bottom
    pub sections: Vec<SectionBox>,
    /// Total document height including the footer
    pub document_height: f64,
}

impl PageLayout {
    /// Estimate geometry for a viewport of `width` x `height`
    #[must_use]
    pub fn estimate(page: &Page, width: f64, height: f64) -> Self {
        let mode = LayoutMode::for_width(width);
        let content = page.content();
        let mut y = 0.0;
        let mut sections = Vec::with_capacity(page.sections().len());

        for section in page.sections() {
            let section_height = match section.kind {
                SectionKind::Hero => height,
                kind => section_chrome(mode) + body_height(kind, content, width, mode),
            };
            sections.push(SectionBox {
                id: section.id.clone(),
                rect: Rect::new(0.0, y, width, section_height),
            });
            y += section_height;
        }

        let document_height = y + FOOTER_HEIGHT;
        debug!(
            "Estimated {mode:?} layout: {} sections, {document_height:.0}px",
            sections.len()
        );

        Self {
            mode,
            sections,
            document_height,
        }
    }

    /// Bounds of a section
    #[must_use]
    pub fn rect(&self, id: &SectionId) -> Option<Rect> {
        self.sections.iter().find(|b| &b.id == id).map(|b| b.rect)
    }
}

const FOOTER_HEIGHT: f64 = 180.0;

/// Image, padding, title and tag row of a project card
const PROJECT_CARD_CHROME: f64 = 192.0 + 48.0 + LINE + 8.0 + 16.0 + 28.0;

/// Vertical padding plus the heading block
fn section_chrome(mode: LayoutMode) -> f64 {
    match mode {
        LayoutMode::Narrow => 2.0 * 64.0 + 36.0 + 48.0,
        LayoutMode::Wide => 2.0 * 96.0 + 40.0 + 48.0,
    }
}

/// Lines needed for `text` in a column `width` pixels wide
fn lines(text: &str, width: f64) -> f64 {
    let per_line = (width / CHAR_WIDTH).floor().max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let chars = text.chars().count() as f64;
    (chars / per_line).ceil().max(1.0)
}

fn column_width(width: f64, max: f64) -> f64 {
    (width - 2.0 * GUTTER).min(max).max(1.0)
}

#[allow(clippy::cast_precision_loss)]
fn body_height(kind: SectionKind, content: &Content, width: f64, mode: LayoutMode) -> f64 {
    match kind {
        SectionKind::Hero => 0.0,
        SectionKind::About => {
            let column = column_width(width, 768.0);
            lines(&content.profile.about, column) * 32.0 + 24.0 + LINE
        },
        SectionKind::Experience => {
            let card_width = match mode {
                LayoutMode::Wide => column_width(width, 896.0) / 2.0 - 32.0 - 48.0,
                LayoutMode::Narrow => column_width(width, 896.0) - 40.0 - 48.0,
            };
            content
                .experience
                .iter()
                .map(|item| {
                    let bullets: f64 = item.highlights.iter().map(|b| lines(b, card_width)).sum();
                    48.0 + 3.0 * LINE + 12.0 + bullets * LINE + 48.0
                })
                .sum()
        },
        SectionKind::Skills => {
            let row_width = column_width(width, 896.0);
            let mut rows = 0.0;
            let mut used = row_width;
            for skill in &content.skills {
                let badge = skill.name.chars().count() as f64 * CHAR_WIDTH + 80.0;
                if used + badge > row_width {
                    rows += 1.0;
                    used = 0.0;
                }
                used += badge + 16.0;
            }
            rows * (40.0 + 16.0)
        },
        SectionKind::Certifications => content.certifications.len() as f64 * 104.0,
        SectionKind::Projects => {
            let columns: usize = if width >= GRID_THREE_COLUMNS {
                3
            } else if mode == LayoutMode::Wide {
                2
            } else {
                1
            };
            let card_width = (column_width(width, f64::INFINITY) - 32.0 * (columns as f64 - 1.0))
                / columns as f64
                - 48.0;
            content
                .projects
                .chunks(columns)
                .map(|row| {
                    let tallest = row
                        .iter()
                        .map(|p| lines(&p.description, card_width) * 24.0)
                        .fold(0.0, f64::max);
                    PROJECT_CARD_CHROME + tallest + 32.0
                })
                .sum()
        },
        SectionKind::Contact => {
            let inputs = match mode {
                LayoutMode::Wide => 50.0,
                LayoutMode::Narrow => 2.0 * 50.0 + 24.0,
            };
            let languages = 64.0 + 36.0 + content.languages.len() as f64 * 40.0;
            60.0 + inputs + 24.0 + 140.0 + 24.0 + 50.0 + languages
        },
    }
}
