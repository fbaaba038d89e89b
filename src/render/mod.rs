//! HTML rendering
//!
//! Turns a composed [`Page`] into a single self-contained document. The
//! browser side of reveal tracking lives in the embedded script, which reads
//! its options from `data-` attributes on `<body>`; the server-side tracker
//! and the script share the same threshold and margin that way.

pub mod assets;
mod html;
mod sections;

use std::fmt::{self, Display as _};

use chrono::Datelike;

use crate::config::{ConfigError, SiteConfig};
use crate::core::models::RevealOptions;
use crate::core::services::{NavBar, Page, Section, SectionKind};
use crate::paths::ASSETS_DIR;

pub use html::{Escaped, GlyphSvg, escape};

use sections::{
    About, Certifications, Contact, Footer, Frame, Header, Hero, Projects, Skills, Timeline,
};

/// How the stylesheet and script reach the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetMode {
    /// `<link>` and `<script src>` pointing at `assets/`
    #[default]
    Linked,
    /// Stylesheet and script embedded in the document
    Inline,
}

/// Knobs that change the rendered document
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Reveal options handed to the browser script
    pub reveal: RevealOptions,
    /// Scroll offset past which the header turns opaque
    pub nav_scroll_offset: f64,
    /// Static form `action`
    pub contact_action: Option<String>,
    /// JSON endpoint the script posts the contact form to
    pub contact_api: Option<String>,
    /// Asset embedding
    pub assets: AssetMode,
    /// Copyright year in the footer
    pub year: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            reveal: RevealOptions::default(),
            nav_scroll_offset: NavBar::DEFAULT_SCROLL_OFFSET,
            contact_action: None,
            contact_api: None,
            assets: AssetMode::default(),
            year: chrono::Local::now().year(),
        }
    }
}

impl RenderOptions {
    /// Options for a static build described by `config`
    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            reveal: config.reveal_options()?,
            nav_scroll_offset: config.nav.scroll_offset,
            contact_action: config.contact.endpoint.clone(),
            ..Self::default()
        })
    }

    /// Post the contact form to `endpoint` from the page script
    #[must_use]
    pub fn with_contact_api(mut self, endpoint: impl Into<String>) -> Self {
        self.contact_api = Some(endpoint.into());
        self
    }

    /// Switch asset embedding
    #[must_use]
    pub const fn with_assets(mut self, assets: AssetMode) -> Self {
        self.assets = assets;
        self
    }
}

/// Render the full document
#[must_use]
pub fn render_document(page: &Page, options: &RenderOptions) -> String {
    DocumentView { page, options }.to_string()
}

/// Render one section's markup, `None` for an unknown identifier
#[must_use]
pub fn render_section(page: &Page, id: &str, options: &RenderOptions) -> Option<String> {
    page.section(id)
        .map(|section| SectionView { page, section, options }.to_string())
}

struct DocumentView<'a> {
    page: &'a Page,
    options: &'a RenderOptions,
}

impl DocumentView<'_> {
    fn head(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = &self.page.content().profile;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="UTF-8">"#)?;
        writeln!(
            f,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
        )?;
        writeln!(
            f,
            "<title>{} | {}</title>",
            Escaped(&profile.name),
            Escaped(&profile.headline)
        )?;
        match self.options.assets {
            AssetMode::Linked => writeln!(
                f,
                r#"<link rel="stylesheet" href="{ASSETS_DIR}/{}">"#,
                assets::STYLESHEET
            )?,
            AssetMode::Inline => writeln!(
                f,
                "<style>\n{}</style>",
                assets::text(assets::STYLESHEET).unwrap_or_default()
            )?,
        }
        writeln!(
            f,
            "<noscript><style>[data-reveal] {{ opacity: 1; transform: none; }}</style></noscript>"
        )?;
        writeln!(f, "</head>")
    }

    fn script(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.options.assets {
            AssetMode::Linked => writeln!(
                f,
                r#"<script src="{ASSETS_DIR}/{}" defer></script>"#,
                assets::SCRIPT
            ),
            AssetMode::Inline => writeln!(
                f,
                "<script>\n{}</script>",
                assets::text(assets::SCRIPT).unwrap_or_default()
            ),
        }
    }
}

impl fmt::Display for DocumentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (page, options) = (self.page, self.options);
        let content = page.content();

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        self.head(f)?;

        write!(
            f,
            r#"<body data-reveal-threshold="{}" data-reveal-margin="{}" data-nav-offset="{}""#,
            options.reveal.threshold(),
            options.reveal.root_margin(),
            options.nav_scroll_offset
        )?;
        if let Some(api) = &options.contact_api {
            write!(f, r#" data-contact-api="{}""#, Escaped(api))?;
        }
        writeln!(f, ">")?;

        Header {
            profile: &content.profile,
            nav: &content.nav,
        }
        .fmt(f)?;
        writeln!(f, "<main>")?;
        for section in page.sections() {
            SectionView {
                page,
                section,
                options,
            }
            .fmt(f)?;
        }
        writeln!(f, "</main>")?;
        Footer {
            profile: &content.profile,
            year: options.year,
        }
        .fmt(f)?;

        self.script(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

struct SectionView<'a> {
    page: &'a Page,
    section: &'a Section,
    options: &'a RenderOptions,
}

impl fmt::Display for SectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = self.page.content();
        let section = self.section;
        match section.kind {
            SectionKind::Hero => Hero {
                section,
                profile: &content.profile,
            }
            .fmt(f),
            SectionKind::About => Frame {
                section,
                body: About(&content.profile),
            }
            .fmt(f),
            SectionKind::Experience => Frame {
                section,
                body: Timeline(&content.experience),
            }
            .fmt(f),
            SectionKind::Skills => Frame {
                section,
                body: Skills(&content.skills),
            }
            .fmt(f),
            SectionKind::Certifications => Frame {
                section,
                body: Certifications(&content.certifications),
            }
            .fmt(f),
            SectionKind::Projects => Frame {
                section,
                body: Projects(&content.projects),
            }
            .fmt(f),
            SectionKind::Contact => Frame {
                section,
                body: Contact {
                    profile: &content.profile,
                    languages: &content.languages,
                    action: self.options.contact_action.as_deref(),
                },
            }
            .fmt(f),
        }
    }
}
