use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Extra class on the dialog, e.g. `modal--wide`
    #[prop(optional, into)]
    class: String,
    /// Footer buttons (Save, Cancel, ...)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes; the listener goes away with the modal
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let handle_overlay_click = move |_| on_close.run(());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    let dialog_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", class)
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class=dialog_class role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        class="button button--icon modal__close"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}

/// Browser confirm dialog; `false` when no window is available
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
