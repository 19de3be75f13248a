//! Client-side search over the fetched invoice list

use contracts::domain::a001_invoice::Invoice;

use crate::shared::list_utils::{field_contains, filter_list, Searchable};

impl Searchable for Invoice {
    fn matches_filter(&self, query: &str) -> bool {
        field_contains(self.serial.as_deref(), query)
            || field_contains(self.contact_email.as_deref(), query)
            || field_contains(self.authorizer_name.as_deref(), query)
            || self
                .products
                .iter()
                .any(|p| field_contains(Some(&p.description), query))
    }
}

/// Invoices shown for the current search text and sent-only toggle
///
/// Pure function of its inputs; keeps the original order.
pub fn visible_invoices(all: &[Invoice], search_text: &str, sent_only: bool) -> Vec<Invoice> {
    if !sent_only {
        return filter_list(all, search_text);
    }

    let sent: Vec<Invoice> = all.iter().filter(|i| i.sent_via_email).cloned().collect();
    filter_list(&sent, search_text)
}
