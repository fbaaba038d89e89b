//! Tests for layout estimation and timeline placement

use folio::core::services::{
    LayoutMode, PageLayout, TimelinePlacement, layout::WIDE_BREAKPOINT, timeline_placement,
};

use crate::common::{builtin_page, sid};

#[test]
fn test_layout_mode_breakpoint() {
    assert_eq!(LayoutMode::for_width(WIDE_BREAKPOINT - 0.5), LayoutMode::Narrow);
    assert_eq!(LayoutMode::for_width(WIDE_BREAKPOINT), LayoutMode::Wide);
}

#[test]
fn test_two_entries_alternate_when_wide() {
    assert_eq!(timeline_placement(0, LayoutMode::Wide), TimelinePlacement::Left);
    assert_eq!(timeline_placement(1, LayoutMode::Wide), TimelinePlacement::Right);
}

#[test]
fn test_entries_stack_when_narrow() {
    assert_eq!(timeline_placement(0, LayoutMode::Narrow), TimelinePlacement::Stacked);
    assert_eq!(timeline_placement(1, LayoutMode::Narrow), TimelinePlacement::Stacked);
}

#[test]
fn test_sections_are_contiguous_and_ordered() {
    let page = builtin_page();
    let layout = PageLayout::estimate(&page, 1280.0, 800.0);

    assert_eq!(layout.sections.len(), page.sections().len());
    assert_eq!(layout.mode, LayoutMode::Wide);

    let mut y = 0.0;
    for (section, boxed) in page.sections().iter().zip(&layout.sections) {
        assert_eq!(section.id, boxed.id);
        assert!((boxed.rect.y - y).abs() < 1e-9);
        assert!(boxed.rect.height > 0.0);
        y = boxed.rect.bottom();
    }
    assert!(layout.document_height > y);
}

#[test]
fn test_hero_fills_viewport() {
    let page = builtin_page();
    let layout = PageLayout::estimate(&page, 390.0, 844.0);
    let hero = layout.rect(&sid("home")).unwrap();
    assert!((hero.height - 844.0).abs() < f64::EPSILON);
    assert_eq!(layout.mode, LayoutMode::Narrow);
}

#[test]
fn test_narrow_page_is_taller() {
    let page = builtin_page();
    let wide = PageLayout::estimate(&page, 1280.0, 800.0);
    let narrow = PageLayout::estimate(&page, 390.0, 800.0);
    assert!(narrow.document_height > wide.document_height);
}
