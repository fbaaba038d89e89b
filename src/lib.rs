//! folio - Single-page portfolio renderer
//!
//! A personal portfolio page built from a fixed sequence of sections, each
//! revealed the first time it scrolls into view.
//!
//! - [`core`] - Domain models, ports, and page behavior services
//! - [`adapters`] - Headless viewport and contact sinks
//! - [`content`] - Built-in content and the TOML content loader
//! - [`render`] - HTML document rendering and embedded assets
//! - [`simulation`] - A page mounted in a headless viewport
//! - [`api`] - HTTP-agnostic handlers for the local server
//! - [`config`] - `~/.folio/config.toml`

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod content;
pub mod core;
pub mod output;
pub mod paths;
pub mod render;
pub mod simulation;
