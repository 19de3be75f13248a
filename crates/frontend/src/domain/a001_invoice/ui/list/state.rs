use contracts::domain::a001_invoice::Invoice;
use leptos::prelude::*;

/// Identifies one invoice history request; later requests compare greater
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Clone, Debug, Default)]
pub struct InvoiceHistoryState {
    /// Last successfully fetched collection, replaced wholesale
    pub invoices: Vec<Invoice>,
    pub loading: bool,
    pub error: Option<String>,
    /// Invoice shown in the details modal; the modal is open iff set
    pub selected: Option<Invoice>,
    pub is_loaded: bool,
    latest_request: RequestToken,
}

impl InvoiceHistoryState {
    /// Marks a new request as in flight and returns its token
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.latest_request = RequestToken(self.latest_request.0 + 1);
        self.loading = true;
        self.error = None;
        self.latest_request
    }

    /// Applies the outcome of the request identified by `token`.
    ///
    /// Outcomes of superseded requests are dropped. Returns whether the
    /// outcome was applied.
    pub fn complete_fetch(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Invoice>, String>,
    ) -> bool {
        if token != self.latest_request {
            return false;
        }

        match result {
            Ok(invoices) => {
                self.invoices = invoices;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        self.loading = false;
        self.is_loaded = true;
        true
    }

    pub fn open_details(&mut self, invoice: Invoice) {
        self.selected = Some(invoice);
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.selected.is_some()
    }
}

pub fn create_state() -> RwSignal<InvoiceHistoryState> {
    RwSignal::new(InvoiceHistoryState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(serial: &str) -> Invoice {
        Invoice {
            serial: Some(serial.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = InvoiceHistoryState::default();
        assert!(state.invoices.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn test_successful_fetch_replaces_collection() {
        let mut state = InvoiceHistoryState::default();
        state.invoices = vec![invoice("OLD")];

        let token = state.begin_fetch();
        assert!(state.loading);

        assert!(state.complete_fetch(token, Ok(vec![invoice("INV-1"), invoice("INV-2")])));
        assert!(!state.loading);
        assert!(state.is_loaded);
        assert_eq!(state.invoices, vec![invoice("INV-1"), invoice("INV-2")]);
    }

    #[test]
    fn test_failed_fetch_keeps_collection() {
        let mut state = InvoiceHistoryState::default();
        let token = state.begin_fetch();
        state.complete_fetch(token, Err("Unable to load invoice history".into()));
        assert!(!state.loading);
        assert!(state.invoices.is_empty());
        assert_eq!(state.error.as_deref(), Some("Unable to load invoice history"));

        let token = state.begin_fetch();
        state.complete_fetch(token, Ok(vec![invoice("INV-1")]));

        let token = state.begin_fetch();
        assert!(state.error.is_none());
        state.complete_fetch(token, Err("Tenant not found".into()));
        assert_eq!(state.invoices, vec![invoice("INV-1")]);
        assert_eq!(state.error.as_deref(), Some("Tenant not found"));
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut state = InvoiceHistoryState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(second > first);

        // Newer request answers first
        assert!(state.complete_fetch(second, Ok(vec![invoice("NEW")])));
        assert!(!state.complete_fetch(first, Ok(vec![invoice("OLD")])));
        assert_eq!(state.invoices, vec![invoice("NEW")]);

        // Older request answers first: loading stays on until the newer one lands
        let third = state.begin_fetch();
        let fourth = state.begin_fetch();
        assert!(!state.complete_fetch(third, Err("boom".into())));
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.complete_fetch(fourth, Ok(Vec::new())));
        assert!(!state.loading);
        assert!(state.invoices.is_empty());
    }

    #[test]
    fn test_details_modal() {
        let mut state = InvoiceHistoryState::default();
        state.open_details(invoice("A"));
        assert!(state.is_modal_open());

        state.open_details(invoice("B"));
        assert_eq!(state.selected, Some(invoice("B")));

        state.close_details();
        assert!(!state.is_modal_open());
        assert!(state.selected.is_none());
    }
}
