//! Content List Component
//!
//! Partner banner editor. Rows are edited in a draft and saved together
//! with the display settings.

use alliance_core::grouping::{rank_options, RankOption};
use alliance_core::{Behavior, Direction, MediaResolver, Partner, PartnerChange};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, warn};

use crate::components::{DraftToolbar, MediaField, MessageModal, RowActions};
use crate::context::{use_admin_context, use_strings, PartnerEditor};
use crate::store::{use_admin_store, AdminStateStoreFields};

#[component]
pub fn ContentList() -> impl IntoView {
    let ctx = use_admin_context();
    let store = use_admin_store();
    let strings = use_strings();
    let editor = ctx.partners;

    let options = Memo::new(move |_| rank_options(&store.rank_labels().get()));
    let len = Signal::derive(move || editor.len());
    let (editing_message, set_editing_message) = signal::<Option<usize>>(None);

    let on_save = move |_: ()| {
        spawn_local(async move {
            if let Err(err) = editor.save().await {
                debug!(error = %err, "partner save rejected");
            }
        })
    };

    let rows = move || {
        let rows = editor.rows();
        if rows.is_empty() {
            return view! {
                <tr class="no-items">
                    <td colspan="8">"No partners yet. Add one to get started."</td>
                </tr>
            }
            .into_any();
        }
        rows.into_iter()
            .enumerate()
            .map(|(index, (rank, partner))| {
                view! {
                    <PartnerRow
                        editor=editor
                        index=index
                        rank=rank
                        partner=partner
                        options=options
                        len=len
                        on_edit_message=move |index: usize| set_editing_message.set(Some(index))
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    let modal = move || {
        let index = editing_message.get()?;
        let message = editor.rows().get(index).map(|(_, p)| p.message.clone())?;
        Some(view! {
            <MessageModal
                message=message
                on_save=move |text: String| {
                    editor.update(index, PartnerChange::Message(text));
                    set_editing_message.set(None);
                }
                on_close=move |_: ()| set_editing_message.set(None)
            />
        })
    };

    view! {
        <div class="s2j-content-list">
            <h2>"Alliance Partners"</h2>
            <table class="wp-list-table widefat fixed striped">
                <thead>
                    <tr>
                        <th class="s2j-col-rank">"#"</th>
                        <th>"Front Page"</th>
                        <th>"Rank"</th>
                        <th>"Logo"</th>
                        <th>"Poster"</th>
                        <th>"Behavior"</th>
                        <th>"Jump URL / Message"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <DraftToolbar
                add_label=format!("{} Partner", strings.add_new)
                dirty=Signal::derive(move || editor.is_dirty())
                saving=Signal::derive(move || ctx.save_all_busy())
                on_add=move |_: ()| {
                    editor.append(Partner::blank());
                }
                on_save=on_save
                on_cancel=move |_: ()| editor.cancel()
            />
            {modal}
        </div>
    }
}

#[component]
fn PartnerRow(
    editor: PartnerEditor,
    index: usize,
    rank: usize,
    partner: Partner,
    options: Memo<Vec<RankOption>>,
    #[prop(into)] len: Signal<usize>,
    #[prop(into)] on_edit_message: Callback<usize>,
) -> impl IntoView {
    let ctx = use_admin_context();
    let Partner {
        frontpage,
        rank: rank_value,
        logo,
        poster,
        jump_url,
        behavior,
        message,
        ..
    } = partner;

    // A video logo brings its generated poster along
    let on_logo = move |id: u32| {
        editor.update(index, PartnerChange::Logo(id));
        if id == 0 {
            editor.update(index, PartnerChange::Poster(0));
            return;
        }
        let library = ctx.media.get_value();
        spawn_local(async move {
            let poster = match library.resolve(id).await {
                Ok(Some(media)) if media.is_video() => library.poster_for(id).await,
                Ok(_) => Ok(None),
                Err(err) => Err(err),
            };
            match poster {
                Ok(Some(poster)) if editor.rows().get(index).is_some_and(|(_, p)| p.logo == id) => {
                    editor.update(index, PartnerChange::Poster(poster));
                }
                Ok(_) => {}
                Err(err) => warn!(logo = id, error = %err, "poster lookup failed"),
            }
        });
    };

    let rank_select = {
        let current = rank_value.clone();
        move || {
            let mut choices = options.get();
            if !choices.iter().any(|o| o.value.eq_ignore_ascii_case(&current)) {
                choices.push(RankOption {
                    value: current.clone(),
                    label: format!("{current} (unknown)"),
                });
            }
            choices
                .into_iter()
                .map(|option| {
                    let selected = option.value.eq_ignore_ascii_case(&current);
                    view! { <option value=option.value selected=selected>{option.label}</option> }
                })
                .collect_view()
        }
    };

    let target = match behavior {
        Behavior::Jump => view! {
            <input
                type="url"
                class="regular-text"
                placeholder="https://"
                prop:value=jump_url
                on:change=move |ev| {
                    editor.update(index, PartnerChange::JumpUrl(event_target_value(&ev)));
                }
            />
        }
        .into_any(),
        Behavior::Modal => {
            let preview = if message.is_empty() {
                "(no message)".to_string()
            } else {
                message.chars().take(60).collect()
            };
            view! {
                <span class="s2j-message-preview">{preview}</span>
                <button type="button" class="button button-small" on:click=move |_| on_edit_message.run(index)>
                    "Edit Message"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <tr>
            <td class="s2j-col-rank">{rank}</td>
            <td>
                <input
                    type="checkbox"
                    prop:checked=frontpage
                    on:change=move |ev| {
                        editor.update(index, PartnerChange::Frontpage(event_target_checked(&ev)));
                    }
                />
            </td>
            <td>
                <select on:change=move |ev| {
                    editor.update(index, PartnerChange::Rank(event_target_value(&ev)));
                }>
                    {rank_select}
                </select>
            </td>
            <td>
                <MediaField label="Logo" attachment_id=logo on_select=on_logo />
            </td>
            <td>
                <MediaField
                    label="Poster"
                    attachment_id=poster
                    on_select=move |id: u32| {
                        editor.update(index, PartnerChange::Poster(id));
                    }
                />
            </td>
            <td>
                <select on:change=move |ev| {
                    let behavior = Behavior::from_wire(&event_target_value(&ev));
                    editor.update(index, PartnerChange::Behavior(behavior));
                }>
                    {Behavior::ALL
                        .into_iter()
                        .map(|option| {
                            let selected = option == behavior;
                            view! {
                                <option value=option.as_str() selected=selected>
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td>{target}</td>
            <td>
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
            </td>
        </tr>
    }
}
