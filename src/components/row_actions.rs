//! Row Actions Component
//!
//! Up / down / delete buttons shown at the end of every editable row.

use alliance_core::Direction;
use leptos::prelude::*;

use super::DeleteConfirmButton;

#[component]
pub fn RowActions(
    index: usize,
    #[prop(into)] len: Signal<usize>,
    #[prop(into)] on_move: Callback<Direction>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="s2j-row-actions">
            <button
                type="button"
                class="button button-small"
                title="Move up"
                disabled=move || index == 0
                on:click=move |_| on_move.run(Direction::Up)
            >
                "↑"
            </button>
            <button
                type="button"
                class="button button-small"
                title="Move down"
                disabled=move || index + 1 >= len.get()
                on:click=move |_| on_move.run(Direction::Down)
            >
                "↓"
            </button>
            <DeleteConfirmButton button_class="button button-small button-link-delete" on_confirm=on_delete />
        </div>
    }
}
