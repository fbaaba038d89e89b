//! Icon glyphs
//!
//! The page only ever draws icons from a fixed set, so content records name
//! a glyph instead of carrying raw markup. Each glyph is a 24x24 stroked
//! outline; [`Glyph::svg_body`] returns the shapes inside the `<svg>` element.

use serde::{Deserialize, Serialize};

/// A named vector icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// HTML
    Html,
    /// CSS
    Css,
    /// JavaScript
    #[serde(rename = "javascript")]
    JavaScript,
    /// React
    React,
    /// Node.js
    Node,
    /// Express
    Express,
    /// MongoDB
    #[serde(rename = "mongodb")]
    MongoDb,
    /// Project management document
    ProjectManagement,
    /// Shield used for PMI certifications
    Pmi,
    /// LinkedIn
    #[serde(rename = "linkedin")]
    LinkedIn,
    /// GitHub
    #[serde(rename = "github")]
    GitHub,
    /// Hamburger menu button
    Menu,
}

impl Glyph {
    /// Every glyph, in declaration order
    pub const ALL: [Self; 12] = [
        Self::Html,
        Self::Css,
        Self::JavaScript,
        Self::React,
        Self::Node,
        Self::Express,
        Self::MongoDb,
        Self::ProjectManagement,
        Self::Pmi,
        Self::LinkedIn,
        Self::GitHub,
        Self::Menu,
    ];

    /// Stable name used in content files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::JavaScript => "javascript",
            Self::React => "react",
            Self::Node => "node",
            Self::Express => "express",
            Self::MongoDb => "mongodb",
            Self::ProjectManagement => "project-management",
            Self::Pmi => "pmi",
            Self::LinkedIn => "linkedin",
            Self::GitHub => "github",
            Self::Menu => "menu",
        }
    }

    /// SVG shapes for this glyph, drawn in a `0 0 24 24` view box
    #[must_use]
    pub const fn svg_body(self) -> &'static str {
        match self {
            Self::Html => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            },
            Self::Css => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 2v10"/><path d="m4.93 4.93 7.07 7.07"/>"#
            },
            Self::JavaScript => {
                r#"<path d="M20 4.4A10.24 10.24 0 0 0 12 2C6.5 2 2 6.5 2 12s4.5 10 10 10a10.24 10.24 0 0 0 8-2.4"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#
            },
            Self::React => {
                r#"<circle cx="12" cy="12" r="2"/><path d="M16.24 7.76A6 6 0 0 1 12 6a6 6 0 0 1-4.24 1.76"/><path d="M17.66 11.2A9 9 0 0 1 12 9.05a9 9 0 0 1-5.66 2.15"/><path d="M21.17 14.86A12.01 12.01 0 0 1 12 12.1a12.01 12.01 0 0 1-9.17 2.76"/>"#
            },
            Self::Node => r#"<path d="M20 6L9 17l-5-5"/>"#,
            Self::Express => r#"<path d="m13 17-5-5 5-5"/><path d="m6 17-5-5 5-5"/>"#,
            Self::MongoDb => {
                r#"<path d="M12 2a10 10 0 1 0 10 10H12V2Z"/><path d="M12 2a10 10 0 0 0-9.96 10.5h9.96V2Z"/>"#
            },
            Self::ProjectManagement => {
                r#"<path d="M15.5 2H8.6c-.4 0-.8.2-1.1.5-.3.3-.5.7-.5 1.1V21c0 .4.2.8.5 1.1.3.3.7.5 1.1.5h7.8c.4 0 .8-.2 1.1-.5.3-.3.5-.7.5-1.1V6.5L15.5 2z"/><path d="M15 2v5h5"/><path d="M10 16s.8-1.4 2-2 2-2 2-2"/><path d="M10 11h4"/>"#
            },
            Self::Pmi => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
            Self::LinkedIn => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            },
            Self::GitHub => {
                r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/>"#
            },
            Self::Menu => r#"<path d="M4 6h16M4 12h16m-7 6h7"/>"#,
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Glyph {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|glyph| glyph.name() == wanted)
            .ok_or_else(|| format!("Unknown glyph: {s}"))
    }
}
