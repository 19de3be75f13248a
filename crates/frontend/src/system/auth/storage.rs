use web_sys::window;

use super::context::SessionContext;

/// Written by the login flow, read-only here
const TENANT_SLUG_KEY: &str = "slug";
const ACCESS_TOKEN_KEY: &str = "token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Get tenant slug from localStorage
pub fn get_tenant_slug() -> Option<String> {
    get_item(TENANT_SLUG_KEY)
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

/// Snapshot of the stored session; empty when storage is unavailable
pub fn load_session() -> SessionContext {
    SessionContext::new(get_tenant_slug(), get_access_token())
}
