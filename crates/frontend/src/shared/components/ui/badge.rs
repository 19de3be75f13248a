use leptos::prelude::*;

/// Label and BEM modifier of the sent-status badge
pub fn sent_badge_parts(sent: bool) -> (&'static str, &'static str) {
    if sent {
        ("Sent", "badge--success")
    } else {
        ("No", "badge--neutral")
    }
}

/// Sent / not sent marker for invoices
#[component]
pub fn SentBadge(
    /// Whether the invoice was emailed to the recipient
    sent: bool,
) -> impl IntoView {
    let (label, modifier) = sent_badge_parts(sent);

    view! { <span class=format!("badge {modifier}")>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_badge_parts() {
        assert_eq!(sent_badge_parts(true), ("Sent", "badge--success"));
        assert_eq!(sent_badge_parts(false), ("No", "badge--neutral"));
    }
}
