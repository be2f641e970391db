//! Rank Label Manager Component
//!
//! Edits the rank labels partners are grouped under. Titles drive the slug;
//! rows keep their saved number until the list is saved.

use alliance_core::{Direction, RankLabel, RankLabelChange};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use crate::components::{DraftToolbar, MediaField, RowActions};
use crate::context::{use_admin_context, use_strings, RankLabelEditor};

#[component]
pub fn RankLabelManager() -> impl IntoView {
    let ctx = use_admin_context();
    let strings = use_strings();
    let editor = ctx.rank_labels;
    let len = Signal::derive(move || editor.len());

    let rows = move || {
        let rows = editor.rows();
        if rows.is_empty() {
            return view! { <p class="description">"No rank labels yet."</p> }.into_any();
        }
        rows.into_iter()
            .enumerate()
            .map(|(index, (rank, label))| {
                view! { <RankLabelRow editor=editor index=index rank=rank label=label len=len /> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="s2j-rank-label-manager">
            <h2>"Rank Labels"</h2>
            <div class="s2j-rank-label-list">{rows}</div>
            <DraftToolbar
                add_label=format!("{} Rank Label", strings.add_new)
                dirty=Signal::derive(move || editor.is_dirty())
                saving=Signal::derive(move || editor.is_saving())
                on_add=move |_: ()| {
                    editor.append(RankLabel::blank());
                }
                on_save=move |_: ()| {
                    spawn_local(async move {
                        if let Err(err) = editor.save().await {
                            debug!(error = %err, "rank label save rejected");
                        }
                    })
                }
                on_cancel=move |_: ()| editor.cancel()
            />
        </div>
    }
}

#[component]
fn RankLabelRow(
    editor: RankLabelEditor,
    index: usize,
    rank: usize,
    label: RankLabel,
    #[prop(into)] len: Signal<usize>,
) -> impl IntoView {
    let RankLabel {
        title,
        content,
        thumbnail_id,
        slug,
        ..
    } = label;
    let slug = if slug.is_empty() { "(generated from title)".to_string() } else { slug };

    view! {
        <div class="s2j-rank-label-row postbox">
            <div class="s2j-rank-label-header">
                <span class="s2j-row-number">{format!("#{rank}")}</span>
                <input
                    type="text"
                    class="regular-text"
                    placeholder="Title"
                    prop:value=title
                    on:change=move |ev| {
                        editor.update(index, RankLabelChange::Title(event_target_value(&ev)));
                    }
                />
                <code class="s2j-slug">{slug}</code>
                <RowActions
                    index=index
                    len=len
                    on_move=move |direction: Direction| {
                        editor.move_row(index, direction);
                    }
                    on_delete=move |_: ()| {
                        editor.remove(index);
                    }
                />
            </div>
            <div class="s2j-rank-label-body">
                <textarea
                    rows="3"
                    class="large-text"
                    placeholder="Description"
                    prop:value=content
                    on:change=move |ev| {
                        editor.update(index, RankLabelChange::Content(event_target_value(&ev)));
                    }
                ></textarea>
                <MediaField
                    label="Thumbnail"
                    attachment_id=thumbnail_id
                    on_select=move |id: u32| {
                        editor.update(index, RankLabelChange::Thumbnail(id));
                    }
                />
            </div>
        </div>
    }
}
