//! Table-driven tests for parsing and validation rules

use test_case::test_case;

use folio::core::models::{ContactError, ContactMessage, RevealOptions, RootMargin, SectionId};
use folio::core::services::{LayoutMode, TimelinePlacement, timeline_placement};

#[test_case("0px" ; "zero px")]
#[test_case("0" ; "bare zero")]
#[test_case("10px" ; "single")]
#[test_case("10px 5%" ; "vertical horizontal")]
#[test_case("-20% 0px -70%" ; "three values")]
#[test_case("1px 2px 3px 4px" ; "four values")]
fn test_root_margin_accepts(input: &str) {
    assert!(RootMargin::parse(input).is_ok());
}

#[test_case("" ; "empty")]
#[test_case("10" ; "missing unit")]
#[test_case("10em" ; "unsupported unit")]
#[test_case("1px 2px 3px 4px 5px" ; "five values")]
#[test_case("abcpx" ; "not a number")]
fn test_root_margin_rejects(input: &str) {
    assert!(RootMargin::parse(input).is_err());
}

#[test_case(0.0, true ; "lower bound")]
#[test_case(0.1, true ; "default")]
#[test_case(1.0, true ; "upper bound")]
#[test_case(-0.01, false ; "negative")]
#[test_case(1.5, false ; "above one")]
#[test_case(f64::NAN, false ; "nan")]
fn test_threshold_range(threshold: f64, valid: bool) {
    assert_eq!(RevealOptions::new(threshold, RootMargin::ZERO).is_ok(), valid);
}

#[test_case("about", true ; "word")]
#[test_case("work-history", true ; "hyphenated")]
#[test_case("section2", true ; "digit")]
#[test_case("", false ; "empty")]
#[test_case("About", false ; "uppercase")]
#[test_case("#about", false ; "with hash")]
#[test_case("2fast", false ; "leading digit")]
#[test_case("trailing-", false ; "trailing hyphen")]
#[test_case("a b", false ; "space")]
fn test_section_id_validity(id: &str, valid: bool) {
    assert_eq!(SectionId::parse(id).is_ok(), valid);
}

#[test_case("jane@example.com" ; "plain")]
#[test_case("  jane@example.com  " ; "padded")]
#[test_case("j@x" ; "minimal")]
fn test_contact_email_accepted(email: &str) {
    let message = ContactMessage::new("Jane", email, "Hello").unwrap();
    assert_eq!(message.email, email.trim());
}

#[test_case("" ; "empty")]
#[test_case("jane" ; "no at")]
#[test_case("@example.com" ; "no local part")]
#[test_case("jane@" ; "no domain")]
#[test_case("a@b@c" ; "two ats")]
fn test_contact_email_rejected(email: &str) {
    let err = ContactMessage::new("Jane", email, "Hello").unwrap_err();
    assert!(matches!(err, ContactError::InvalidEmail(_)));
}

#[test_case(0, LayoutMode::Wide, TimelinePlacement::Left ; "first wide")]
#[test_case(1, LayoutMode::Wide, TimelinePlacement::Right ; "second wide")]
#[test_case(4, LayoutMode::Wide, TimelinePlacement::Left ; "fifth wide")]
#[test_case(0, LayoutMode::Narrow, TimelinePlacement::Stacked ; "first narrow")]
#[test_case(3, LayoutMode::Narrow, TimelinePlacement::Stacked ; "fourth narrow")]
fn test_timeline_placement(index: usize, mode: LayoutMode, expected: TimelinePlacement) {
    assert_eq!(timeline_placement(index, mode), expected);
}

#[test_case(320.0, LayoutMode::Narrow ; "phone")]
#[test_case(767.9, LayoutMode::Narrow ; "just below")]
#[test_case(768.0, LayoutMode::Wide ; "breakpoint")]
#[test_case(1440.0, LayoutMode::Wide ; "desktop")]
fn test_layout_mode(width: f64, expected: LayoutMode) {
    assert_eq!(LayoutMode::for_width(width), expected);
}
