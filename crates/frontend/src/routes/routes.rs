use crate::domain::a001_invoice::ui::InvoiceHistoryPage;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content">
                <p class="text-muted">"Page not found"</p>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=InvoiceHistoryPage />
                <Route path=path!("/admin/invoices") view=InvoiceHistoryPage />
            </Routes>
        </Router>
    }
}
