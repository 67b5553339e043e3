//! Base-address discovery for the generation service.
//!
//! The backend is reached on a fixed port next to wherever the UI is served
//! from. The resulting base URL is computed once at startup and handed to
//! [`crate::generation::api::GenerationApi`]; nothing else reads the window
//! location.

/// Fallback base URL when no window is available (tests, non-browser hosts).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Port the generation service listens on.
const API_PORT: u16 = 8000;

/// Get the base URL for generation-service requests.
///
/// Combines the current page's scheme and hostname with the fixed backend
/// port, e.g. "http://localhost:8000".
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return DEFAULT_API_BASE.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}
