//! Invoice history endpoint client
//!
//! Errors are returned as ready-to-display strings.

use contracts::domain::a001_invoice::{Invoice, InvoiceHistoryResponse};
use contracts::shared::api::ErrorResponse;
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::api_utils::api_base;
use crate::system::auth::SessionContext;

pub const HISTORY_PATH: &str = "/user/invoice/history";

/// Shown when the server gives no usable message
pub const FETCH_FAILED_MESSAGE: &str = "Unable to load invoice history";

#[derive(Serialize)]
struct HistoryQuery<'a> {
    slug: &'a str,
}

/// Full request URL, with the tenant slug as query parameter when known
pub fn history_url(base: &str, session: &SessionContext) -> String {
    let mut url = format!("{}{}", base, HISTORY_PATH);

    if let Some(slug) = session.tenant_id() {
        match serde_qs::to_string(&HistoryQuery { slug }) {
            Ok(query) => {
                url.push('?');
                url.push_str(&query);
            }
            Err(e) => log::warn!("Failed to encode invoice history query: {}", e),
        }
    }

    url
}

/// Headers carrying the credentials and tenant of `session`
pub fn request_headers(session: &SessionContext) -> Vec<(&'static str, String)> {
    let mut headers = Vec::with_capacity(3);

    if let Some(token) = session.auth_token() {
        headers.push(("Authorization", format!("Bearer {}", token)));
    }

    if let Some(slug) = session.tenant_id() {
        headers.push(("x-user-slug", slug.to_string()));
        headers.push(("x-slug", slug.to_string()));
    }

    headers
}

/// Invoices of a 2xx body; anything unexpected reads as an empty list
pub fn parse_history_body(body: &str) -> Vec<Invoice> {
    match serde_json::from_str::<InvoiceHistoryResponse>(body) {
        Ok(response) => response.data,
        Err(e) => {
            log::warn!("Unexpected invoice history body, treating as empty: {}", e);
            Vec::new()
        }
    }
}

/// User-facing message for a non-2xx body
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.user_message().map(str::to_string))
        .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string())
}

/// Fetch the invoice history of the session's tenant
pub async fn fetch_invoices(session: &SessionContext) -> Result<Vec<Invoice>, String> {
    let url = history_url(&api_base(), session);

    let mut request = Request::get(&url);
    for (name, value) in request_headers(session) {
        request = request.header(name, &value);
    }

    let response = request.send().await.map_err(|e| {
        log::error!("Failed to send invoice history request: {}", e);
        FETCH_FAILED_MESSAGE.to_string()
    })?;

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Failed to read invoice history body: {}", e);
            String::new()
        }
    };

    if !response.ok() {
        log::error!("Invoice history request failed: {}", response.status());
        return Err(error_message_from_body(&body));
    }

    Ok(parse_history_body(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(slug: Option<&str>, token: Option<&str>) -> SessionContext {
        SessionContext::new(slug.map(String::from), token.map(String::from))
    }

    #[test]
    fn test_history_url() {
        assert_eq!(
            history_url("https://api.example.com", &session(Some("acme"), None)),
            "https://api.example.com/user/invoice/history?slug=acme"
        );
        assert_eq!(
            history_url("https://api.example.com", &session(None, Some("t"))),
            "https://api.example.com/user/invoice/history"
        );
    }

    #[test]
    fn test_history_url_encodes_slug() {
        let url = history_url("", &session(Some("a&b"), None));
        assert_eq!(url, "/user/invoice/history?slug=a%26b");
    }

    #[test]
    fn test_request_headers() {
        let headers = request_headers(&session(Some("acme"), Some("t0k3n")));
        assert_eq!(
            headers,
            vec![
                ("Authorization", "Bearer t0k3n".to_string()),
                ("x-user-slug", "acme".to_string()),
                ("x-slug", "acme".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_headers_without_token() {
        let headers = request_headers(&session(Some("acme"), None));
        assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
        assert_eq!(headers.len(), 2);

        assert!(request_headers(&session(None, None)).is_empty());
    }

    #[test]
    fn test_parse_history_body() {
        let invoices = parse_history_body(
            r#"{"data":[{"serial":"INV-1","grandTotal":100,"sentViaEmail":true}]}"#,
        );
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].serial.as_deref(), Some("INV-1"));
        assert!(invoices[0].sent_via_email);
    }

    #[test]
    fn test_parse_history_body_tolerates_garbage() {
        assert!(parse_history_body("").is_empty());
        assert!(parse_history_body("<html>502</html>").is_empty());
        assert!(parse_history_body(r#"{"ok":true}"#).is_empty());
        assert!(parse_history_body(r#"{"data":{"serial":"INV-1"}}"#).is_empty());
    }

    #[test]
    fn test_parse_history_body_keeps_invoices_with_odd_fields() {
        let invoices = parse_history_body(
            r#"{"data":[{"serial":"INV-1","grandTotal":"100.00","sentViaEmail":true},{"serial":"INV-2","grandTotal":5}]}"#,
        );

        let serials: Vec<_> = invoices.iter().map(|i| i.serial.as_deref()).collect();
        assert_eq!(serials, vec![Some("INV-1"), Some("INV-2")]);
        assert_eq!(invoices[0].grand_total, Some(100.0));
        assert_eq!(invoices[1].grand_total, Some(5.0));
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message_from_body(r#"{"message":"Tenant not found"}"#),
            "Tenant not found"
        );
        assert_eq!(error_message_from_body(r#"{"message":""}"#), FETCH_FAILED_MESSAGE);
        assert_eq!(error_message_from_body("Bad Gateway"), FETCH_FAILED_MESSAGE);
    }
}
