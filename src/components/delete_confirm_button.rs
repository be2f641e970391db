//! Delete Confirm Button Component
//!
//! Inline delete confirmation: the first click asks, the second removes.

use leptos::prelude::*;

use crate::context::use_strings;

/// Row removal with an inline "are you sure" step. `on_confirm` only runs
/// on the second click; removal lands in the draft like any other edit.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let strings = use_strings();
    let (confirm_delete, set_confirm_delete) = signal(false);
    let delete_label = strings.delete.clone();
    let confirm_label = strings.delete.clone();
    let cancel_label = strings.cancel.clone();
    let prompt = strings.confirm_delete;

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {delete_label.clone()}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="s2j-delete-confirm">
                <span class="s2j-delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="button button-small button-link-delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    {confirm_label.clone()}
                </button>
                <button
                    type="button"
                    class="button button-small"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    {cancel_label.clone()}
                </button>
            </span>
        </Show>
    }
}
