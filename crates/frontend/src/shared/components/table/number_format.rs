//! Number formatting helpers for tables and detail views

/// Currency used when the backend does not say otherwise
pub const DEFAULT_CURRENCY: &str = "USD";

/// Formats a number with `,` thousands separators and the given number of
/// fractional digits
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert a separator every 3 digits, counting from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Symbol for an ISO 4217 code, if we know one
fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" | "CNY" => Some("¥"),
        "INR" => Some("₹"),
        "RUB" => Some("₽"),
        "NGN" => Some("₦"),
        _ => None,
    }
}

/// Formats a monetary amount, `"-"` when there is none
///
/// Always renders 2 fractional digits. Codes without a known symbol are
/// written as a prefix (`"CHF 10.00"`). Non-finite amounts fall back to the
/// plain number.
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_money;
/// assert_eq!(format_money(Some(1234567.891), "USD"), "$1,234,567.89");
/// assert_eq!(format_money(None, "USD"), "-");
/// ```
pub fn format_money(amount: Option<f64>, currency: &str) -> String {
    let Some(value) = amount else {
        return "-".to_string();
    };

    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let digits = format_number_with_decimals(value.abs(), 2);

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}", sign, symbol, digits),
        None => format!("{}{} {}", sign, currency.to_ascii_uppercase(), digits),
    }
}
