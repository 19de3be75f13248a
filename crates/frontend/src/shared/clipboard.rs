//! Clipboard utilities for copying text to clipboard
//!
//! Copying is best-effort: the Clipboard API may be missing (insecure
//! context) or denied, and neither case is reported to the user.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard
///
/// # Example
/// ```rust,ignore
/// copy_to_clipboard("INV-2024-001");
/// ```
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                log::debug!("Clipboard write rejected: {:?}", e);
            }
        }
    });
}
