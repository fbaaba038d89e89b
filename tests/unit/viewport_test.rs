//! Tests for the headless viewport

use folio::adapters::HeadlessViewport;
use folio::core::models::{Rect, RevealOptions, RootMargin};
use folio::core::ports::IntersectionSource;
use folio::core::services::{LayoutMode, PageLayout, SectionBox};

use crate::common::sid;

fn viewport_with_box(y: f64, height: f64) -> HeadlessViewport {
    let mut viewport = HeadlessViewport::new(100.0, 100.0);
    viewport.place(sid("target"), Rect::new(0.0, y, 100.0, height));
    viewport
}

#[test]
fn test_observe_queues_initial_entry() {
    let mut viewport = viewport_with_box(0.0, 50.0);
    let id = viewport.observe(&sid("target"), &RevealOptions::default());

    let notes = viewport.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].0, id);
    assert!(notes[0].1.is_intersecting);
    assert!((notes[0].1.intersection_ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_initial_entry_for_offscreen_element() {
    let mut viewport = viewport_with_box(300.0, 100.0);
    viewport.observe(&sid("target"), &RevealOptions::default());

    let notes = viewport.take_notifications();
    assert_eq!(notes.len(), 1);
    assert!(!notes[0].1.is_intersecting);
}

#[test]
fn test_notifies_only_when_threshold_side_changes() {
    let mut viewport = viewport_with_box(150.0, 100.0);
    viewport.observe(&sid("target"), &RevealOptions::default());
    viewport.take_notifications();

    viewport.scroll_to(10.0);
    assert!(viewport.take_notifications().is_empty());

    viewport.scroll_to(65.0);
    let notes = viewport.take_notifications();
    assert_eq!(notes.len(), 1);
    assert!((notes[0].1.intersection_ratio - 0.15).abs() < 1e-9);

    viewport.scroll_to(70.0);
    assert!(viewport.take_notifications().is_empty());
}

#[test]
fn test_unobserve_drops_pending_entries() {
    let mut viewport = viewport_with_box(0.0, 50.0);
    let id = viewport.observe(&sid("target"), &RevealOptions::default());

    viewport.unobserve(id);

    assert!(viewport.take_notifications().is_empty());
    assert_eq!(viewport.observation_count(), 0);
}

#[test]
fn test_unobserve_unknown_handle_is_ignored() {
    let mut viewport = viewport_with_box(0.0, 50.0);
    viewport.observe(&sid("target"), &RevealOptions::default());
    viewport.take_notifications();

    viewport.unobserve(folio::core::ports::ObservationId(42));
    assert_eq!(viewport.observation_count(), 1);
}

#[test]
fn test_negative_root_margin_shrinks_viewport() {
    let viewport = viewport_with_box(95.0, 10.0);

    let plain = viewport.entry_for(&sid("target"), &RevealOptions::default());
    assert!((plain.intersection_ratio - 0.5).abs() < 1e-9);

    let margin = RootMargin::parse("-10% 0px").unwrap();
    let options = RevealOptions::new(0.1, margin).unwrap();
    let shrunk = viewport.entry_for(&sid("target"), &options);
    assert!(!shrunk.is_intersecting);
    assert!((shrunk.root_rect.height - 80.0).abs() < 1e-9);
}

#[test]
fn test_zero_area_element_in_view_has_full_ratio() {
    let viewport = viewport_with_box(50.0, 0.0);
    let entry = viewport.entry_for(&sid("target"), &RevealOptions::default());
    assert!(entry.is_intersecting);
    assert!((entry.intersection_ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_element_is_not_intersecting() {
    let viewport = HeadlessViewport::new(100.0, 100.0);
    let entry = viewport.entry_for(&sid("nowhere"), &RevealOptions::default());
    assert!(!entry.is_intersecting);
}

#[test]
fn test_scroll_into_view_unknown_element_does_not_scroll() {
    let mut viewport = viewport_with_box(150.0, 100.0);
    viewport.scroll_to(20.0);

    assert!(!viewport.scroll_into_view(&sid("nowhere")));
    assert!((viewport.scroll_y() - 20.0).abs() < f64::EPSILON);

    assert!(viewport.scroll_into_view(&sid("target")));
    assert!((viewport.scroll_y() - 150.0).abs() < f64::EPSILON);
}

#[test]
fn test_resize_rechecks_observations() {
    let mut viewport = viewport_with_box(150.0, 100.0);
    viewport.observe(&sid("target"), &RevealOptions::default());
    viewport.take_notifications();

    viewport.resize(100.0, 200.0);

    let notes = viewport.take_notifications();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].1.is_intersecting);
}

#[test]
fn test_relayout_checks_against_new_geometry_only() {
    let mut viewport = viewport_with_box(150.0, 50.0);
    viewport.observe(&sid("target"), &RevealOptions::default());
    viewport.take_notifications();

    // At the new height the old box would be in view; the new one is not.
    let layout = PageLayout {
        mode: LayoutMode::Narrow,
        sections: vec![SectionBox {
            id: sid("target"),
            rect: Rect::new(0.0, 250.0, 100.0, 50.0),
        }],
        document_height: 300.0,
    };
    viewport.relayout(100.0, 200.0, &layout);

    assert!(viewport.take_notifications().is_empty());
    assert!((viewport.height() - 200.0).abs() < f64::EPSILON);
    let entry = viewport.entry_for(&sid("target"), &RevealOptions::default());
    assert!(!entry.is_intersecting);
}
