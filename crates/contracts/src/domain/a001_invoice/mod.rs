pub mod aggregate;

pub use aggregate::{Invoice, InvoiceHistoryResponse, InvoiceProduct};
