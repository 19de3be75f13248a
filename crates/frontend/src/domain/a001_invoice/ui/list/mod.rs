mod state;

pub use state::{InvoiceHistoryState, RequestToken};

use contracts::domain::a001_invoice::Invoice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::InvoiceDetails;
use crate::domain::a001_invoice::api;
use crate::domain::a001_invoice::export::export_invoices;
use crate::domain::a001_invoice::filter::visible_invoices;
use crate::shared::components::table::{format_money, TableCellMoney, DEFAULT_CURRENCY};
use crate::shared::components::ui::SentBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::text_utils::{non_empty_or, truncate, EMPTY_PLACEHOLDER};
use crate::system::auth::use_session;
use state::create_state;

/// Address length on mobile cards
const CARD_ADDRESS_LEN: usize = 120;

#[component]
pub fn InvoiceHistoryPage() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_invoice--list" category=PAGE_CAT_LIST>
            <InvoiceHistoryList />
        </PageFrame>
    }
}

fn dash_if_empty(value: &Option<String>) -> String {
    non_empty_or(value.as_deref(), EMPTY_PLACEHOLDER)
}

fn invoice_row(invoice: Invoice, query: &str, on_open: Callback<Invoice>) -> impl IntoView {
    let serial = dash_if_empty(&invoice.serial);
    let highlighted = highlight_matches(&serial, query);
    let date_str = invoice.date_str.clone().unwrap_or_default();
    let issue_date = format_date(invoice.issue_date.as_deref());
    let contact = dash_if_empty(&invoice.contact_email);
    let address = dash_if_empty(&invoice.address);
    let address_title = address.clone();
    let sent_at = format_date(invoice.sent_at.as_deref());
    let downloaded_at = format_date(invoice.downloaded_at.as_deref());
    let grand_total = invoice.grand_total;
    let sent = invoice.sent_via_email;
    let target = StoredValue::new(invoice);

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>
                    <div class="invoice-table__serial">{highlighted}</div>
                    <div class="text-muted text-xs">{date_str}</div>
                </TableCellLayout>
            </TableCell>
            <TableCell><TableCellLayout>{issue_date}</TableCellLayout></TableCell>
            <TableCellMoney value=Signal::derive(move || grand_total) bold=true />
            <TableCell><TableCellLayout>{contact}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class="invoice-table__address" title=address_title>{address}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell><TableCellLayout><SentBadge sent=sent /></TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{sent_at}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{downloaded_at}</TableCellLayout></TableCell>
            <TableCell>
                <button
                    class="button button--icon"
                    title="View details"
                    aria-label="View details"
                    on:click=move |_| on_open.run(target.get_value())
                >
                    {icon("eye")}
                </button>
            </TableCell>
        </TableRow>
    }
}

fn invoice_card(invoice: Invoice, on_open: Callback<Invoice>) -> impl IntoView {
    let serial = non_empty_or(invoice.serial.as_deref(), "Invoice");
    let issue_date = format_date(invoice.issue_date.as_deref());
    let address = truncate(&dash_if_empty(&invoice.address), CARD_ADDRESS_LEN);
    let total = format_money(invoice.grand_total, DEFAULT_CURRENCY);
    let target = StoredValue::new(invoice);

    view! {
        <article class="invoice-card">
            <div class="invoice-card__main">
                <h4 class="invoice-card__title">{serial}</h4>
                <div class="text-muted text-xs">{issue_date}</div>
                <div class="invoice-card__address">{address}</div>
            </div>
            <div class="invoice-card__side">
                <div class="text-muted text-xs">"Total"</div>
                <div class="invoice-card__total">{total}</div>
                <button
                    class="button button--icon"
                    aria-label="View details"
                    on:click=move |_| on_open.run(target.get_value())
                >
                    {icon("eye")}
                </button>
            </div>
        </article>
    }
}

#[component]
fn InvoiceHistoryList() -> impl IntoView {
    let state = create_state();
    let session = StoredValue::new(use_session());
    let search = RwSignal::new(String::new());
    let sent_only = RwSignal::new(false);
    let export_error = RwSignal::new(None::<String>);

    let visible = Memo::new(move |_| {
        let query = search.get();
        let sent = sent_only.get();
        state.with(|s| visible_invoices(&s.invoices, &query, sent))
    });
    let total_count = Memo::new(move |_| state.with(|s| s.invoices.len()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let selected = Memo::new(move |_| state.with(|s| s.selected.clone()));

    let load_data = move || {
        let Some(token) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let session = session.get_value();
        log::debug!("Loading invoice history ({:?})", token);

        spawn_local(async move {
            let result = api::fetch_invoices(&session).await;
            let summary = match &result {
                Ok(invoices) => format!("{} invoices", invoices.len()),
                Err(e) => format!("error: {}", e),
            };

            match state.try_update(|s| s.complete_fetch(token, result)) {
                Some(true) => log::info!("Invoice history loaded: {}", summary),
                Some(false) => log::debug!("Discarded stale invoice history response ({:?})", token),
                None => log::debug!("Invoice history view gone before response arrived"),
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded || s.loading) {
            load_data();
        }
    });

    let run_export = move |invoices: Vec<Invoice>| match export_invoices(&invoices) {
        Ok(()) => export_error.set(None),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            export_error.set(Some(e));
        }
    };

    let open_details = Callback::new(move |invoice: Invoice| {
        state.update(|s| s.open_details(invoice));
    });
    let close_details = Callback::new(move |_: ()| {
        state.update(|s| s.close_details());
    });
    let export_single = Callback::new(move |invoice: Invoice| run_export(vec![invoice]));

    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon("invoices")}
                <h1 class="page__title">"Invoice History"</h1>
            </div>
            <div class="page__header-right">
                <div class="invoice-history__search">
                    {icon("search")}
                    <Input
                        value=search
                        placeholder="Search by serial, product, authorizer, email..."
                        attr:aria-label="Search invoices"
                    />
                </div>
                <Button
                    appearance=Signal::derive(move || {
                        if sent_only.get() {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Secondary
                        }
                    })
                    on_click=move |_| sent_only.update(|v| *v = !*v)
                    attr:title="Toggle sent only"
                    attr:aria-pressed=move || sent_only.get().to_string()
                >
                    {icon("mail")}
                    {move || if sent_only.get() { " Sent" } else { " All" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                    attr:title="Refresh"
                    attr:aria-label="Refresh"
                >
                    {icon("refresh")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| run_export(visible.get_untracked())
                    attr:title="Export CSV"
                    attr:aria-label="Export CSV"
                >
                    {icon("download")}
                    " Export"
                </Button>
            </div>
        </div>

        <div class="page__content">
            {move || export_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                if loading.get() {
                    view! {
                        <div class="invoice-history__loading">
                            <Spinner />
                        </div>
                    }.into_any()
                } else if let Some(err) = error.get() {
                    view! { <div class="alert alert--error">{err}</div> }.into_any()
                } else {
                    let items = visible.get();
                    let query = search.get();
                    let shown = items.len();

                    let table_body = if items.is_empty() {
                        view! {
                            <TableRow>
                                <TableCell attr:colspan="9">
                                    <div class="text-muted text-center">"No invoices found."</div>
                                </TableCell>
                            </TableRow>
                        }.into_any()
                    } else {
                        items
                            .iter()
                            .cloned()
                            .map(|invoice| invoice_row(invoice, &query, open_details))
                            .collect_view()
                            .into_any()
                    };

                    let cards = if items.is_empty() {
                        view! { <div class="text-muted text-center">"No invoices found."</div> }.into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|invoice| invoice_card(invoice, open_details))
                            .collect_view()
                            .into_any()
                    };

                    view! {
                        <div class="invoice-history__table">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Serial"</TableHeaderCell>
                                        <TableHeaderCell>"Issue Date"</TableHeaderCell>
                                        <TableHeaderCell>"Grand Total"</TableHeaderCell>
                                        <TableHeaderCell>"Contact"</TableHeaderCell>
                                        <TableHeaderCell>"Address"</TableHeaderCell>
                                        <TableHeaderCell>"Sent"</TableHeaderCell>
                                        <TableHeaderCell>"Sent At"</TableHeaderCell>
                                        <TableHeaderCell>"Downloaded"</TableHeaderCell>
                                        <TableHeaderCell>"Actions"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>{table_body}</TableBody>
                            </Table>
                        </div>

                        <div class="invoice-history__cards">{cards}</div>

                        <div class="invoice-history__footer text-muted text-xs">
                            "Showing " <strong>{shown}</strong> " of "
                            <strong>{total_count.get()}</strong> " records."
                        </div>
                    }.into_any()
                }
            }}
        </div>

        {move || selected.get().map(|invoice| view! {
            <InvoiceDetails invoice=invoice on_close=close_details on_export=export_single />
        })}
    }
}
