use serde::{Deserialize, Serialize};

use crate::shared::api::serde_helpers::{
    lenient_amount, lenient_bool, lenient_f64, lenient_i64, lenient_list, lenient_string,
    lenient_text, opaque_id,
};

/// Invoice as returned by `GET /user/invoice/history`.
///
/// Read-only on the client: the admin view never sends it back. Every field
/// reads leniently so that one odd value never drops the invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<String>,
    /// `_id` on Mongo-backed services
    #[serde(default, rename = "_id", deserialize_with = "opaque_id")]
    pub mongo_id: Option<String>,
    /// Human-readable invoice number
    #[serde(default, deserialize_with = "lenient_string")]
    pub serial: Option<String>,
    /// Issue date pre-formatted by the backend
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_str: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub issue_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub grand_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub authorizer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub sent_via_email: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sent_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub downloaded_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub products: Vec<InvoiceProduct>,
}

impl Invoice {
    /// Opaque identifier, whichever of `id` / `_id` the backend sent
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().or(self.mongo_id.as_deref())
    }
}

/// Line item of an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceProduct {
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: Option<f64>,
}

impl InvoiceProduct {
    /// Quantity, defaulting to a single unit
    pub fn effective_quantity(&self) -> i64 {
        self.quantity.unwrap_or(1)
    }

    /// Line total as sent by the backend, or `unit_price × quantity`
    pub fn line_total(&self) -> f64 {
        self.total
            .unwrap_or_else(|| self.unit_price * self.effective_quantity() as f64)
    }
}

/// Success body of the invoice history endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceHistoryResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub data: Vec<Invoice>,
}
