use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Modal dialog with an overlay
///
/// Closes on the close button, an overlay click or Escape. The keyboard
/// listener is removed when the modal unmounts.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Optional subtitle under the title
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Callback when modal should close
    #[prop(into)]
    on_close: Callback<()>,
    /// Optional action buttons (Export, Print, etc.) to display in header
    #[prop(optional, into)]
    action_buttons: Option<ViewFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Clicks inside the dialog must not reach the overlay
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {subtitle.map(|s| view! { <div class="modal-subtitle">{s}</div> })}
                    </div>
                    <div class="modal-header-actions">
                        {action_buttons.map(|buttons| buttons.run())}
                        <button class="button button--icon modal__close" aria-label="Close" on:click=handle_close>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
