/// Opens the browser print dialog for the current page
///
/// Pagination and print layout are left to the browser and print CSS.
pub fn print_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.print() {
        log::warn!("Print dialog unavailable: {:?}", e);
    }
}
