//! Static assets shipped inside the binary
//!
//! The stylesheet and the browser-side reveal script live in `assets/` at
//! the crate root and are embedded at compile time.

use std::path::Path;

use include_dir::{Dir, include_dir};

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Stylesheet filename
pub const STYLESHEET: &str = "style.css";

/// Browser script filename
pub const SCRIPT: &str = "reveal.js";

/// Raw bytes of an asset
#[must_use]
pub fn get(name: &str) -> Option<&'static [u8]> {
    ASSETS.get_file(name).map(include_dir::File::contents)
}

/// Text of a UTF-8 asset
#[must_use]
pub fn text(name: &str) -> Option<&'static str> {
    ASSETS.get_file(name).and_then(include_dir::File::contents_utf8)
}

/// Every embedded asset as `(file name, bytes)`
pub fn all() -> impl Iterator<Item = (&'static str, &'static [u8])> {
    ASSETS
        .files()
        .filter_map(|file| file.path().to_str().map(|name| (name, file.contents())))
}

/// MIME type for an asset name
#[must_use]
pub fn content_type(name: &str) -> &'static str {
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
