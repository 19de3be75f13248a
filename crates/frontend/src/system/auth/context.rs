use leptos::prelude::*;

use super::storage;

/// Tenant and credentials forwarded with every backend request.
///
/// Read once at startup and passed explicitly to API helpers, so they never
/// touch browser storage themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionContext {
    tenant_id: Option<String>,
    auth_token: Option<String>,
}

impl SessionContext {
    /// Blank strings are treated as absent
    pub fn new(tenant_id: Option<String>, auth_token: Option<String>) -> Self {
        Self {
            tenant_id: tenant_id.filter(|v| !v.trim().is_empty()),
            auth_token: auth_token.filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

/// Session provided by `App`, falling back to a fresh storage read
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(storage::load_session)
}
