//! HTTP-agnostic API layer
//!
//! Typed request/response structures and pure handlers that any HTTP server
//! implementation (or the CLI) can call.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{get_nav, get_section, get_sections, submit_contact};
pub use types::{ApiResponse, ContactReceipt, ContactRequest, NavData, SectionInfo, SectionsData};
