//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port of the backend server
const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the backend port. Returns an empty string if window is not
/// available, so paths stay relative.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for(&protocol, &hostname)
}

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/apps/invoice/clients");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
