//! Draft Toolbar Component
//!
//! Add / Save / Cancel controls for one list editor. Save and Cancel are
//! only offered while the list has unsaved changes, and Save stays
//! disabled while a save is outstanding.

use leptos::prelude::*;

use crate::context::use_strings;

#[component]
pub fn DraftToolbar(
    #[prop(into)] add_label: String,
    #[prop(into)] dirty: Signal<bool>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let strings = use_strings();

    view! {
        <div class="s2j-draft-toolbar">
            <button type="button" class="button" on:click=move |_| on_add.run(())>
                {add_label}
            </button>
            <Show when=move || dirty.get()>
                <span class="s2j-unsaved">"You have unsaved changes."</span>
            </Show>
            <button
                type="button"
                class="button button-primary"
                disabled=move || !dirty.get() || saving.get()
                on:click=move |_| on_save.run(())
            >
                {
                    let save = strings.save.clone();
                    move || if saving.get() { "Saving…".to_string() } else { save.clone() }
                }
            </button>
            <button
                type="button"
                class="button"
                disabled=move || !dirty.get() || saving.get()
                on:click=move |_| on_cancel.run(())
            >
                {strings.cancel.clone()}
            </button>
        </div>
    }
}
