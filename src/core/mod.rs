//! Core domain logic for folio
//!
//! This module contains pure page behavior with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Content records, identifiers, geometry, observation options
//! - `services/` - Reveal tracking, navigation bar state, layout, composition
//! - `ports/` - Trait definitions for the viewport and contact delivery
//! - `error` - Composition errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::SiteError;
