//! Tests for the reveal tracker

use folio::core::models::{RevealOptions, RootMargin};
use folio::core::ports::ObservationId;
use folio::core::services::{Reveal, VisibilityTracker};

use crate::common::{FakeIntersectionSource, entry, sid};

fn attached(target: &str) -> (VisibilityTracker, FakeIntersectionSource) {
    let mut source = FakeIntersectionSource::new();
    let mut tracker = VisibilityTracker::default();
    tracker.attach(&mut source, Some(&sid(target)));
    (tracker, source)
}

#[test]
fn test_starts_unseen() {
    let tracker = VisibilityTracker::default();
    assert!(!tracker.is_revealed());
    assert_eq!(tracker.state(), &Reveal::Unseen);
    assert!(tracker.entry().is_none());
    assert!(tracker.observation().is_none());
}

#[test]
fn test_attach_registers_one_observation() {
    let (tracker, source) = attached("about");
    let id = source.only_live();
    assert_eq!(tracker.observation(), Some(id));
    assert_eq!(tracker.target(), Some(&sid("about")));
    assert_eq!(source.live[0].2, RevealOptions::default());
}

#[test]
fn test_reveals_on_threshold() {
    let (mut tracker, source) = attached("about");
    let id = source.only_live();

    let hit = entry("about", true, 0.25);
    assert!(tracker.notify(id, &hit));
    assert!(tracker.is_revealed());
    assert_eq!(tracker.entry(), Some(&hit));
}

#[test]
fn test_below_threshold_stays_unseen() {
    let (mut tracker, source) = attached("about");
    let id = source.only_live();

    assert!(!tracker.notify(id, &entry("about", true, 0.05)));
    assert!(!tracker.notify(id, &entry("about", false, 0.0)));
    assert!(!tracker.is_revealed());
}

#[test]
fn test_not_intersecting_never_reveals() {
    let options = RevealOptions::new(0.0, RootMargin::ZERO).unwrap();
    let mut source = FakeIntersectionSource::new();
    let mut tracker = VisibilityTracker::new(options);
    tracker.attach(&mut source, Some(&sid("skills")));
    let id = source.only_live();

    assert!(!tracker.notify(id, &entry("skills", false, 0.0)));
    assert!(tracker.notify(id, &entry("skills", true, 0.0)));
}

#[test]
fn test_reveal_never_reverts() {
    let (mut tracker, source) = attached("about");
    let id = source.only_live();

    let first = entry("about", true, 0.5);
    assert!(tracker.notify(id, &first));
    assert!(!tracker.notify(id, &entry("about", false, 0.0)));
    assert!(!tracker.notify(id, &entry("about", true, 1.0)));

    assert!(tracker.is_revealed());
    assert_eq!(tracker.entry(), Some(&first));
}

#[test]
fn test_attach_same_target_is_noop() {
    let (mut tracker, mut source) = attached("about");
    let before = source.only_live();

    tracker.attach(&mut source, Some(&sid("about")));

    assert_eq!(source.only_live(), before);
    assert_eq!(source.observe_calls(), 1);
    assert!(source.released.is_empty());
}

#[test]
fn test_attach_new_target_releases_old_first() {
    let (mut tracker, mut source) = attached("about");
    let old = source.only_live();

    tracker.attach(&mut source, Some(&sid("skills")));

    let new = source.only_live();
    assert_ne!(old, new);
    assert_eq!(source.released, vec![old]);
    assert_eq!(tracker.target(), Some(&sid("skills")));
}

#[test]
fn test_stale_notification_ignored() {
    let (mut tracker, mut source) = attached("about");
    let old = source.only_live();
    tracker.attach(&mut source, Some(&sid("skills")));

    assert!(!tracker.notify(old, &entry("about", true, 1.0)));
    assert!(!tracker.notify(ObservationId(999), &entry("skills", true, 1.0)));
    assert!(!tracker.is_revealed());
}

#[test]
fn test_detach_before_visible_stays_unseen() {
    let (mut tracker, mut source) = attached("about");
    let id = source.only_live();

    tracker.detach(&mut source);

    assert!(source.live.is_empty());
    assert_eq!(source.released, vec![id]);
    assert!(!tracker.is_revealed());
    assert!(!tracker.notify(id, &entry("about", true, 1.0)));
}

#[test]
fn test_attach_none_detaches() {
    let (mut tracker, mut source) = attached("about");
    tracker.attach(&mut source, None);
    assert!(source.live.is_empty());
    assert!(tracker.observation().is_none());
}

#[test]
fn test_reveal_survives_detach_and_reattach() {
    let (mut tracker, mut source) = attached("about");
    let id = source.only_live();
    tracker.notify(id, &entry("about", true, 1.0));

    tracker.detach(&mut source);
    assert!(tracker.is_revealed());

    tracker.attach(&mut source, Some(&sid("about")));
    let again = source.only_live();
    assert!(!tracker.notify(again, &entry("about", false, 0.0)));
    assert!(tracker.is_revealed());
}

#[test]
fn test_reconfigure_reobserves_with_new_options() {
    let (mut tracker, mut source) = attached("about");
    let old = source.only_live();
    let strict = RevealOptions::new(0.9, RootMargin::ZERO).unwrap();

    tracker.reconfigure(&mut source, strict);

    let new = source.only_live();
    assert_ne!(old, new);
    assert_eq!(source.live[0].2, strict);
    assert!(!tracker.notify(old, &entry("about", true, 1.0)));
    assert!(!tracker.notify(new, &entry("about", true, 0.5)));
    assert!(tracker.notify(new, &entry("about", true, 0.95)));
}

#[test]
fn test_reconfigure_same_options_is_noop() {
    let (mut tracker, mut source) = attached("about");
    tracker.reconfigure(&mut source, RevealOptions::default());
    assert_eq!(source.observe_calls(), 1);
    assert!(source.released.is_empty());
}

#[test]
fn test_reconfigure_unattached_only_stores_options() {
    let mut source = FakeIntersectionSource::new();
    let mut tracker = VisibilityTracker::default();
    let options = RevealOptions::new(0.5, RootMargin::ZERO).unwrap();

    tracker.reconfigure(&mut source, options);

    assert_eq!(tracker.options(), &options);
    assert_eq!(source.observe_calls(), 0);
}
