//! HTML text helpers

use std::fmt;

use crate::core::models::Glyph;

/// Text escaped for use in element content and double-quoted attributes
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let replacement = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(replacement)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

/// Escape `text` into an owned string
#[must_use]
pub fn escape(text: &str) -> String {
    Escaped(text).to_string()
}

/// An inline `<svg>` for a glyph
#[derive(Debug, Clone, Copy)]
pub struct GlyphSvg {
    /// Which icon
    pub glyph: Glyph,
    /// Rendered width and height in pixels
    pub size: u32,
}

impl GlyphSvg {
    /// Icon at the default 20px badge size
    #[must_use]
    pub const fn badge(glyph: Glyph) -> Self {
        Self { glyph, size: 20 }
    }

    /// Icon at 24px
    #[must_use]
    pub const fn large(glyph: Glyph) -> Self {
        Self { glyph, size: 24 }
    }
}

impl fmt::Display for GlyphSvg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg class="glyph glyph--{name}" xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{body}</svg>"#,
            name = self.glyph.name(),
            size = self.size,
            body = self.glyph.svg_body(),
        )
    }
}
