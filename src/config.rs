//! Site configuration
//!
//! Read from `--config <path>` or `~/.folio/config.toml`. Every key is
//! optional; a missing default file means defaults throughout.
//!
//! ```toml
//! [reveal]
//! threshold = 0.1
//! root_margin = "0px"
//!
//! [nav]
//! scroll_offset = 10.0
//!
//! [content]
//! path = "content.toml"
//!
//! [contact]
//! sink = "outbox"
//! outbox = "outbox.jsonl"
//! endpoint = "https://forms.example.com/submit"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [build]
//! out_dir = "dist"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::SinkKind;
use crate::core::models::{OptionsError, RevealOptions, RootMargin};
use crate::core::services::NavBar;
use crate::paths;

/// Errors from loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested file does not exist or cannot be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// Reveal options out of range
    #[error("invalid [reveal] settings: {0}")]
    Reveal(#[from] OptionsError),

    /// Negative or non-finite nav offset
    #[error("nav.scroll_offset must be a non-negative number, got {0}")]
    ScrollOffset(f64),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Section reveal settings
    pub reveal: RevealConfig,
    /// Navigation bar settings
    pub nav: NavConfig,
    /// Content source
    pub content: ContentConfig,
    /// Contact form handling
    pub contact: ContactConfig,
    /// Local server
    pub server: ServerConfig,
    /// Static build
    pub build: BuildConfig,
}

/// `[reveal]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that reveals a section
    pub threshold: f64,
    /// CSS margin shorthand applied to the viewport
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: RevealOptions::DEFAULT_THRESHOLD,
            root_margin: "0px".to_string(),
        }
    }
}

/// `[nav]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset past which the bar turns opaque
    pub scroll_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_offset: NavBar::DEFAULT_SCROLL_OFFSET,
        }
    }
}

/// `[content]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content TOML file; built-in content when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// `[contact]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Where submissions received by `folio serve` go
    pub sink: SinkKind,
    /// Outbox file for the `outbox` sink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbox: Option<PathBuf>,
    /// Form `action` for static builds; no action when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ContactConfig {
    /// Outbox path, defaulting to `~/.folio/outbox.jsonl`
    #[must_use]
    pub fn outbox_path(&self) -> PathBuf {
        self.outbox.clone().unwrap_or_else(paths::default_outbox)
    }
}

/// `[server]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// `[build]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory
    pub out_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(paths::DEFAULT_OUT_DIR),
        }
    }
}

impl SiteConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, `~/.folio/config.toml` is
    /// used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load_file(path)?,
            None => {
                let default = paths::global_config();
                if default.exists() {
                    Self::load_file(&default)?
                } else {
                    debug!("No config at {}, using defaults", default.display());
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text without validating it
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reveal_options()?;
        let offset = self.nav.scroll_offset;
        if !offset.is_finite() || offset < 0.0 {
            return Err(ConfigError::ScrollOffset(offset));
        }
        Ok(())
    }

    /// Reveal options described by `[reveal]`
    pub fn reveal_options(&self) -> Result<RevealOptions, ConfigError> {
        let margin = RootMargin::parse(&self.reveal.root_margin)?;
        Ok(RevealOptions::new(self.reveal.threshold, margin)?)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
