use contracts::domain::a001_invoice::{Invoice, InvoiceProduct};
use leptos::prelude::*;
use thaw::*;

use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::components::table::{format_money, DEFAULT_CURRENCY};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::print::print_page;
use crate::shared::text_utils::{non_empty_or, EMPTY_PLACEHOLDER};

/// One label/value line of the summary column
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Summary lines for the details view; optional contact fields are omitted
/// when absent
pub fn summary_rows(invoice: &Invoice) -> Vec<SummaryRow> {
    let mut rows = vec![SummaryRow {
        label: "Grand Total",
        value: format_money(invoice.grand_total, DEFAULT_CURRENCY),
    }];

    let optional = [
        ("Authorizer", &invoice.authorizer_name),
        ("Contact", &invoice.contact_email),
        ("Phone", &invoice.contact_phone),
    ];
    for (label, value) in optional {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            rows.push(SummaryRow {
                label,
                value: value.to_string(),
            });
        }
    }

    rows.push(SummaryRow {
        label: "Address",
        value: non_empty_or(invoice.address.as_deref(), EMPTY_PLACEHOLDER),
    });
    rows.push(SummaryRow {
        label: "Sent",
        value: if invoice.sent_via_email {
            format!("Yes • {}", format_date(invoice.sent_at.as_deref()))
        } else {
            "No".to_string()
        },
    });
    rows.push(SummaryRow {
        label: "Downloaded",
        value: format_date(invoice.downloaded_at.as_deref()),
    });

    rows
}

/// "Issued: ..." line, preferring the backend's own date string
pub fn issued_label(invoice: &Invoice) -> String {
    let issued = invoice
        .date_str
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format_date(invoice.issue_date.as_deref()));
    format!("Issued: {}", issued)
}

fn product_line(product: InvoiceProduct) -> impl IntoView {
    let quantity = format!(
        "{} × {}",
        product.effective_quantity(),
        format_money(Some(product.unit_price), DEFAULT_CURRENCY)
    );
    let total = format_money(Some(product.line_total()), DEFAULT_CURRENCY);

    view! {
        <div class="invoice-details__product">
            <div>
                <div class="invoice-details__product-name">{product.description}</div>
                <div class="text-muted">{quantity}</div>
            </div>
            <div class="invoice-details__product-total">{total}</div>
        </div>
    }
}

/// Read-only details of one invoice, shown in a modal
#[component]
pub fn InvoiceDetails(
    invoice: Invoice,
    #[prop(into)] on_close: Callback<()>,
    /// Export this invoice alone
    #[prop(into)]
    on_export: Callback<Invoice>,
) -> impl IntoView {
    let title = format!("Invoice {}", invoice.serial.clone().unwrap_or_default());
    let subtitle = issued_label(&invoice);
    let summary = summary_rows(&invoice);
    let serial = StoredValue::new(invoice.serial.clone());
    let products = invoice.products.clone();
    let has_products = !products.is_empty();
    let export_target = StoredValue::new(invoice);

    let action_buttons = move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_export.run(export_target.get_value())
                attr:title="Export single invoice"
            >
                {icon("download")}
                " Export"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| print_page()
                attr:title="Print"
            >
                {icon("printer")}
                " Print"
            </Button>
        }
    };

    view! {
        <Modal title=title subtitle=subtitle on_close=on_close action_buttons=action_buttons>
            <div class="invoice-details">
                <div class="invoice-details__products">
                    <h5 class="invoice-details__section-title">"Products"</h5>
                    {if has_products {
                        products.into_iter().map(product_line).collect_view().into_any()
                    } else {
                        view! { <p class="text-muted">"No products"</p> }.into_any()
                    }}
                </div>

                <div class="invoice-details__summary">
                    <h5 class="invoice-details__section-title">"Summary"</h5>
                    {summary
                        .into_iter()
                        .map(|row| view! {
                            <div class="invoice-details__summary-row">
                                <span>{row.label}</span>
                                <span class="text-right">{row.value}</span>
                            </div>
                        })
                        .collect_view()}

                    <div class="invoice-details__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=serial.with_value(|s| s.is_none())
                            on_click=move |_| {
                                if let Some(serial) = serial.get_value() {
                                    copy_to_clipboard(&serial);
                                }
                            }
                        >
                            {icon("copy")}
                            " Copy Serial"
                        </Button>
                    </div>
                </div>
            </div>
        </Modal>
    }
}
