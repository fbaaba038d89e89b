//! Tests for a page mounted in a headless viewport

use folio::core::models::{NavLink, RevealOptions, RootMargin};
use folio::core::services::{LinkPlacement, NavBar, PageLayout};
use folio::simulation::PageSession;

use crate::common::{builtin_page, sid};

#[test]
fn test_nothing_revealed_before_mount() {
    let page = builtin_page();
    let session = PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    assert!(session.revealed().is_empty());
    assert!(!session.is_mounted());
    assert_eq!(session.viewport().observation_count(), 0);
}

#[test]
fn test_mount_observes_every_tracked_section() {
    let page = builtin_page();
    let mut session =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());

    session.mount();

    assert_eq!(session.viewport().observation_count(), 6);
    assert!(!session.nav().is_scrolled());
    // The hero fills the viewport, so the first section only touches its edge.
    assert!(!session.is_revealed("about"));
}

#[test]
fn test_visible_section_revealed_on_mount() {
    let page = builtin_page();
    let options = RevealOptions::new(0.0, RootMargin::ZERO).unwrap();
    let mut session = PageSession::new(&page, 1280.0, 800.0, options, NavBar::default());

    let revealed = session.mount();

    assert_eq!(revealed.len(), 1);
    assert_eq!(revealed[0].as_str(), "about");
}

#[test]
fn test_scrolling_reveals_in_order_and_never_hides() {
    let page = builtin_page();
    let mut session =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    session.mount();

    let about = session.scroll_to(800.0);
    assert!(about.iter().any(|id| id.as_str() == "about"));
    assert!(session.nav().is_scrolled());

    session.scroll_to(0.0);
    assert!(session.is_revealed("about"));
    assert!(!session.nav().is_scrolled());
}

#[test]
fn test_nav_link_scrolls_to_section() {
    let page = builtin_page();
    let mut session =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    session.mount();
    session.toggle_menu();

    let link = NavLink::new("Contact", "#contact");
    let landed = session.activate(&link, LinkPlacement::Menu).unwrap();

    assert_eq!(landed.as_str(), "contact");
    assert!(session.is_revealed("contact"));
    assert!(!session.nav().is_menu_open());
    assert!(session.viewport().scroll_y() > 0.0);
}

#[test]
fn test_unknown_anchor_does_not_scroll() {
    let page = builtin_page();
    let mut session =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    session.mount();
    session.scroll_to(300.0);

    assert!(session.goto("#blog").is_none());
    assert!((session.viewport().scroll_y() - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_every_builtin_link_lands_and_reveals() {
    let page = builtin_page();
    let mut session =
        PageSession::new(&page, 390.0, 844.0, RevealOptions::default(), NavBar::default());
    session.mount();

    for link in &page.content().nav {
        let landed = session.activate(link, LinkPlacement::Bar).unwrap();
        assert_eq!(landed.href(), link.href);
        assert!(session.is_revealed(landed.as_str()), "{} not revealed", landed);
    }
}

#[test]
fn test_unmount_keeps_reveals_and_releases_observations() {
    let page = builtin_page();
    let mut session =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    session.mount();
    session.goto("#skills");
    let before = session.revealed();

    session.unmount();

    assert_eq!(session.viewport().observation_count(), 0);
    assert_eq!(session.revealed(), before);
    session.scroll_to(0.0);
    assert_eq!(session.revealed(), before);
}

#[test]
fn test_snapshot_serializes() {
    let page = builtin_page();
    let mut session =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    session.mount();
    session.goto("#about");

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["scrolled"], true);
    assert_eq!(json["menu_open"], false);
    assert!(json["revealed"].as_array().unwrap().contains(&serde_json::json!("about")));
}

#[test]
fn test_resize_matches_fresh_mount() {
    let page = builtin_page();
    let mut fresh =
        PageSession::new(&page, 1280.0, 1600.0, RevealOptions::default(), NavBar::default());
    let expected = fresh.mount();

    let mut resized =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    resized.mount();
    let revealed = resized.resize(1280.0, 1600.0);

    assert_eq!(revealed, expected);
    assert_eq!(resized.revealed(), fresh.revealed());
}

#[test]
fn test_resize_across_breakpoint_uses_new_layout() {
    let page = builtin_page();
    let mut fresh =
        PageSession::new(&page, 1280.0, 1600.0, RevealOptions::default(), NavBar::default());
    fresh.mount();

    // The narrow layout's short hero leaves room below it; the wide one fills
    // the whole viewport.
    let mut resized =
        PageSession::new(&page, 700.0, 400.0, RevealOptions::default(), NavBar::default());
    resized.mount();
    resized.resize(1280.0, 1600.0);

    assert!(resized.revealed().is_empty());
    assert_eq!(resized.revealed(), fresh.revealed());
    for section in page.tracked_sections() {
        let options = RevealOptions::default();
        assert_eq!(
            resized.viewport().entry_for(&section.id, &options),
            fresh.viewport().entry_for(&section.id, &options)
        );
    }
}

#[test]
fn test_reconfigure_replaces_every_observation() {
    let page = builtin_page();
    let mut session =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    session.mount();
    let before: Vec<_> = page
        .tracked_sections()
        .filter_map(|s| session.tracker(s.id.as_str()).and_then(|t| t.observation()))
        .collect();

    session.reconfigure(RevealOptions::new(1.0, RootMargin::ZERO).unwrap());

    assert_eq!(session.viewport().observation_count(), 6);
    for section in page.tracked_sections() {
        let tracker = session.tracker(section.id.as_str()).unwrap();
        assert!((tracker.options().threshold() - 1.0).abs() < f64::EPSILON);
        assert!(!before.contains(&tracker.observation().unwrap()));
    }
}

#[test]
fn test_stricter_threshold_ignores_partial_visibility() {
    let page = builtin_page();
    let about = PageLayout::estimate(&page, 1280.0, 800.0)
        .rect(&sid("about"))
        .unwrap();
    // Bottom of the viewport at the middle of the section.
    let half_visible = about.y + about.height / 2.0 - 800.0;

    let mut lenient =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    lenient.mount();
    lenient.scroll_to(half_visible);
    assert!(lenient.is_revealed("about"));

    let mut strict =
        PageSession::new(&page, 1280.0, 800.0, RevealOptions::default(), NavBar::default());
    strict.mount();
    strict.reconfigure(RevealOptions::new(1.0, RootMargin::ZERO).unwrap());
    strict.scroll_to(half_visible);
    assert!(!strict.is_revealed("about"));
}
