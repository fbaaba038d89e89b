//! Centralized path definitions for folio
//!
//! ## Layout
//!
//! ### Build output
//!
//! ```text
//! dist/
//! ├── index.html
//! └── assets/
//!     ├── style.css
//!     └── reveal.js
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.folio/
//! ├── config.toml               # Site configuration
//! └── outbox.jsonl              # Contact submissions (outbox sink)
//! ```

use std::path::PathBuf;

// =============================================================================
// Build output
// =============================================================================

/// Default build output directory
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Rendered page filename
pub const INDEX_HTML: &str = "index.html";

/// Asset subdirectory, also the URL prefix assets are served under
pub const ASSETS_DIR: &str = "assets";

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".folio";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default outbox filename
const OUTBOX_FILE: &str = "outbox.jsonl";

/// Get the global folio directory.
///
/// Returns `~/.folio/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.folio/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default contact outbox path.
///
/// Returns `~/.folio/outbox.jsonl`.
#[must_use]
pub fn default_outbox() -> PathBuf {
    global_config_dir().join(OUTBOX_FILE)
}
