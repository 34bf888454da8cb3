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
    /// Closing is suppressed while this is true (e.g. a save is running)
    #[prop(into, optional)]
    locked: Signal<bool>,
    /// Optional action buttons (Save, Cancel, etc.) to display in header
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let request_close = move || {
        if !locked.get_untracked() {
            on_close.run(());
        }
    };

    // Escape closes; the listener goes away with the modal
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            request_close();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| request_close()>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <div class="modal-header-actions">
                        {move || action_buttons.as_ref().map(|buttons| buttons())}
                        <button
                            class="button button--icon modal__close"
                            prop:disabled=move || locked.get()
                            on:click=move |_| request_close()
                        >
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
