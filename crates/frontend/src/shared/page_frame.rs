//! Root wrapper for routed pages.
//!
//! Every page root carries `id="{entity}--{category}"` and
//! `data-page-category`, so a page found in the DOM inspector can be traced
//! back to its component by searching for the id.

use super::page_standard::*;
use leptos::prelude::*;

/// CSS classes for a page root of the given category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_invoice--list"`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");
    debug_assert!(is_known_category(category), "bad page category: {category}");

    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            {children()}
        </div>
    }
}
