//! Message Modal Component
//!
//! Edits the text a `modal` partner shows when its banner is clicked.

use leptos::prelude::*;

use crate::context::use_strings;

#[component]
pub fn MessageModal(
    message: String,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let strings = use_strings();
    let (text, set_text) = signal(message);

    view! {
        <div class="s2j-modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="s2j-modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                <h2>"Edit Message"</h2>
                <textarea
                    rows="8"
                    class="large-text"
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                ></textarea>
                <div class="s2j-modal-actions">
                    <button
                        type="button"
                        class="button button-primary"
                        on:click=move |_| on_save.run(text.get_untracked())
                    >
                        {strings.save.clone()}
                    </button>
                    <button type="button" class="button" on:click=move |_| on_close.run(())>
                        {strings.cancel.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
