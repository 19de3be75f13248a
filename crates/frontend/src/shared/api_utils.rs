//! API utilities for frontend-backend communication
//!
//! Resolves the backend base URL.

/// Backend base URL baked in at build time, e.g. `BACKEND_URL=https://api.example.com trunk build`
const CONFIGURED_BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Port of the backend when it is served next to the frontend
const DEFAULT_BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Uses `BACKEND_URL` from the build environment when set, otherwise the
/// current window location with port 3000.
///
/// # Returns
/// - API base URL like "https://api.example.com" or "http://localhost:3000"
/// - Empty string if neither is available
pub fn api_base() -> String {
    let location = web_sys::window().map(|w| w.location());
    let protocol = location.as_ref().and_then(|l| l.protocol().ok());
    let hostname = location.as_ref().and_then(|l| l.hostname().ok());

    resolve_api_base(CONFIGURED_BACKEND_URL, protocol.as_deref(), hostname.as_deref())
}

/// Pure part of [`api_base`]
pub fn resolve_api_base(
    configured: Option<&str>,
    protocol: Option<&str>,
    hostname: Option<&str>,
) -> String {
    if let Some(url) = configured.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    match hostname {
        Some(hostname) => format!(
            "{}//{}:{}",
            protocol.unwrap_or("http:"),
            hostname,
            DEFAULT_BACKEND_PORT
        ),
        None => String::new(),
    }
}
