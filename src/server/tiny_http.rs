//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::{Cursor, Read as _};

use log::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use folio::api::{self, ApiError, ApiResponse, ContactRequest};
use folio::core::ports::ContactSink;
use folio::core::services::Page;
use folio::paths::ASSETS_DIR;
use folio::render::assets;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Everything a request handler can see
pub struct SiteState {
    /// Composed page
    pub page: Page,
    /// Document served at `/`, rendered once at startup
    pub html: String,
    /// Where contact submissions go
    pub sink: Box<dyn ContactSink>,
}

impl std::fmt::Debug for SiteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteState")
            .field("html_bytes", &self.html.len())
            .field("sink", &self.sink.name())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle one request
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_request(state: &SiteState, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let method = request.method().clone();
    debug!("{method} {path}");

    if path == "/" || path == "/index.html" {
        return if method == Method::Get {
            body_response(state.html.as_bytes(), "text/html; charset=utf-8", 200)
        } else {
            not_found_response(&format!("No route for {method} {path}"))
        };
    }

    if let Some(name) = path
        .strip_prefix('/')
        .and_then(|p| p.strip_prefix(ASSETS_DIR))
        .and_then(|p| p.strip_prefix('/'))
    {
        return match (&method, assets::get(name)) {
            (&Method::Get, Some(bytes)) => body_response(bytes, assets::content_type(name), 200),
            _ => not_found_response(&format!("Asset not found: {name}")),
        };
    }

    // Supports both /api/v1/... (versioned) and /api/... (legacy)
    let Some(api_path) = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
    else {
        return not_found_response(&format!("No route for {method} {path}"));
    };

    match (&method, api_path) {
        (&Method::Get, "/sections") => handle_result(api::get_sections(&state.page)),
        (&Method::Get, "/nav") => handle_result(api::get_nav(&state.page)),

        (&Method::Post, "/contact") => match read_json_body::<ContactRequest>(request) {
            Ok(req) => handle_result(api::submit_contact(&req, state.sink.as_ref())),
            Err(e) => error_response(&e),
        },

        // Section detail: GET /sections/{id}
        _ if method == Method::Get && api_path.starts_with("/sections/") => {
            let id = api_path.strip_prefix("/sections/").unwrap_or_default();
            handle_result(api::get_section(&state.page, id))
        },

        _ => not_found_response(&format!("API endpoint not found: {method} {api_path}")),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse a JSON body, refusing anything over [`MAX_BODY_BYTES`]
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    if request.body_length().is_some_and(|len| len > MAX_BODY_BYTES) {
        return Err(ApiError::payload_too_large(MAX_BODY_BYTES));
    }

    let mut body = Vec::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES as u64 + 1)
        .read_to_end(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    if body.len() > MAX_BODY_BYTES {
        return Err(ApiError::payload_too_large(MAX_BODY_BYTES));
    }

    serde_json::from_slice(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    if error.status_code() >= 500 {
        warn!("{error}");
    }
    json_response(&ApiResponse::error(error), error.status_code())
}

/// Create a 404 not found response
fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    error_response(&ApiError::not_found(message))
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_vec(data).unwrap_or_else(|_| br#"{"success":false}"#.to_vec());
    body_response(&json, "application/json", status)
}

fn body_response(body: &[u8], content_type: &str, status: u16) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_data(body.to_vec()).with_status_code(StatusCode(status));
    match Header::from_bytes("Content-Type", content_type) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
