//! folio - Single-page portfolio renderer
//!
//! Renders the page, builds it into a static directory, serves it locally,
//! or scrolls it through a headless viewport.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
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

mod cli;
mod server;

/// Main entry point for the folio CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
