//! Table cell for monetary values
//!
//! # Examples
//!
//! ```rust,ignore
//! // Default currency
//! <TableCellMoney value=amount />
//!
//! // Bold, explicit currency
//! <TableCellMoney value=total currency="EUR" bold=true />
//! ```

use super::number_format::{format_money, DEFAULT_CURRENCY};
use leptos::prelude::*;
use thaw::*;

/// Right-aligned money cell
///
/// Missing amounts render as `-`, negative ones are tinted with the error color.
#[component]
pub fn TableCellMoney(
    /// Amount to display
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// ISO 4217 currency code
    #[prop(optional, default = DEFAULT_CURRENCY)]
    currency: &'static str,

    /// Bold font
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || format_money(value.get(), currency);

    let cell_style = move || {
        let mut styles = Vec::new();

        if matches!(value.get(), Some(v) if v < 0.0) {
            styles.push("color: var(--color-error-700)");
        }

        if bold {
            styles.push("font-weight: 600");
        }

        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
