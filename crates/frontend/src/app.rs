use crate::routes::routes::AppRoutes;
use crate::system::auth::storage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Session is read once; the login flow owns the stored values.
    let session = storage::load_session();
    if session.tenant_id().is_none() {
        log::warn!("No tenant slug in localStorage, requests will not be scoped");
    }
    provide_context(session);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
