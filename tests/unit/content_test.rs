//! Tests for content loading

use std::fs;

use folio::content;
use folio::core::SiteError;
use folio::core::models::Glyph;
use tempfile::TempDir;

const MINIMAL: &str = r##"
[profile]
name = "Ada Lovelace"
brand = "AL."
headline = "Analyst"
tagline = "Notes on the engine."
about = "Mathematician."
location = "London"
portrait_url = "https://example.com/ada.png"
email = "ada@example.com"
contact_blurb = "Write to me."

[[profile.social]]
network = "github"
url = "https://github.com/ada"

[[nav]]
name = "About"
href = "#about"

[[skills]]
name = "Analysis"
glyph = "project-management"

[[skills]]
name = "Markup"
glyph = "html"
"##;

#[test]
fn test_builtin_content_counts() {
    let content = content::builtin();
    assert_eq!(content.nav.len(), 5);
    assert_eq!(content.experience.len(), 2);
    assert_eq!(content.skills.len(), 8);
    assert_eq!(content.certifications.len(), 1);
    assert_eq!(content.projects.len(), 3);
    assert_eq!(content.languages.len(), 2);
    assert_eq!(content.profile.social.len(), 2);
}

#[test]
fn test_builtin_skills_have_distinct_glyphs() {
    let content = content::builtin();
    let mut glyphs: Vec<Glyph> = content.skills.iter().map(|s| s.glyph).collect();
    glyphs.dedup();
    assert_eq!(glyphs.len(), 8);
}

#[test]
fn test_load_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("content.toml");
    fs::write(&path, MINIMAL).unwrap();

    let content = content::load(Some(&path)).unwrap();

    assert_eq!(content.profile.name, "Ada Lovelace");
    assert_eq!(content.skills.len(), 2);
    assert_eq!(content.skills[0].glyph, Glyph::ProjectManagement);
    assert!(content.experience.is_empty());
    assert!(content.projects.is_empty());
}

#[test]
fn test_load_without_path_is_builtin() {
    assert_eq!(content::load(None).unwrap(), content::builtin());
}

#[test]
fn test_missing_file_is_read_error() {
    let temp = TempDir::new().unwrap();
    let err = content::load_file(&temp.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, SiteError::ContentRead { .. }));
}

#[test]
fn test_unknown_glyph_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("content.toml");
    fs::write(&path, MINIMAL.replace("\"html\"", "\"cobol\"")).unwrap();

    let err = content::load_file(&path).unwrap_err();
    assert!(matches!(err, SiteError::ContentParse { .. }));
}
